use std::time::Duration;

use crate::page::{ElementHandle, Page, Selector};

pub const TERMS_CONTENT: &str = "terms-content";
pub const TERMS_ICON: &str = "terms-icon";
pub const TERMS_CHEVRON: &str = "chevron-icon";

pub const ODDS_SCROLL_CLASS: &str = "odds-scroll";
pub const WIDGET_CONTAINER_CLASS: &str = "view-widget-container-right";
pub const BETSLIP_CLASS: &str = "betslip-desktop";

const DRAG_SPEED: f32 = 1.5;

/// Collapses or expands the terms block, flipping the icon and rotating
/// the chevron. No-op unless all three elements exist.
pub fn toggle_terms(page: &Page) {
    let (Some(content), Some(icon), Some(chevron)) = (
        page.find_by_id(TERMS_CONTENT),
        page.find_by_id(TERMS_ICON),
        page.find_by_id(TERMS_CHEVRON),
    ) else {
        return;
    };

    if content.has_class("hidden") {
        content.remove_class("hidden");
        icon.set_text("−");
        chevron.set_style("transform", "rotate(180deg)");
    } else {
        content.add_class("hidden");
        icon.set_text("+");
        chevron.set_style("transform", "rotate(0deg)");
    }
}

/// Pointer state machine for a horizontally draggable strip. Inert until
/// pressed; dragging scrolls against the pointer at 1.5x speed.
pub struct DragScroll {
    target: ElementHandle,
    dragging: bool,
    start_x: f32,
    scroll_origin: f32,
}

impl DragScroll {
    pub fn new(target: ElementHandle) -> Self {
        Self {
            target,
            dragging: false,
            start_x: 0.0,
            scroll_origin: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, x: f32) {
        self.dragging = true;
        self.start_x = x;
        self.scroll_origin = self.target.scroll_x();
        self.target.add_class("active");
    }

    pub fn drag(&mut self, x: f32) {
        if !self.dragging {
            return;
        }
        let walk = (x - self.start_x) * DRAG_SPEED;
        self.target.set_scroll_x(self.scroll_origin - walk);
    }

    pub fn release(&mut self) {
        self.dragging = false;
        self.target.remove_class("active");
    }

    pub fn leave(&mut self) {
        self.release();
    }
}

/// Moves the betting widget out of its sidebar container into a fixed
/// bottom-right dock, hiding the now-empty container. Waits for both
/// pieces to appear (the widget script mounts them late); gives up with a
/// console line when they never do.
pub fn dock_betslip(page: &Page, timeout: Duration) {
    let container = match page.watch(Selector::class(WIDGET_CONTAINER_CLASS)).wait(timeout) {
        Ok(container) => container,
        Err(err) => {
            page.push_log(format!("[WARN] Betslip dock skipped: {err}"));
            return;
        }
    };
    let betslip = match page.watch(Selector::class(BETSLIP_CLASS)).wait(timeout) {
        Ok(betslip) => betslip,
        Err(err) => {
            page.push_log(format!("[WARN] Betslip dock skipped: {err}"));
            return;
        }
    };

    page.body().append_child(&betslip);
    container.set_style("display", "none");
    for (name, value) in [
        ("position", "fixed"),
        ("bottom", "0"),
        ("right", "0"),
        ("z-index", "9999"),
        ("max-height", "90vh"),
        ("overflow-y", "auto"),
        ("display", "block"),
        ("background", "white"),
        ("box-shadow", "0 0 10px rgba(0,0,0,0.3)"),
    ] {
        betslip.set_style(name, value);
    }
    page.push_log("[INFO] Betslip docked bottom-right");
}
