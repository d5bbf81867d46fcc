use std::thread;
use std::time::{Duration, Instant};

use cwc_page::config::Config;
use cwc_page::init::Enhancer;
use cwc_page::interactions::{dock_betslip, toggle_terms, DragScroll, ODDS_SCROLL_CLASS};
use cwc_page::page::{Page, ReadyState, Selector};

/// Demo driver: builds a simulated host page that assembles its mount
/// points asynchronously (like a CMS widget script would), runs the full
/// enhancement pipeline against it, exercises the interactive pieces and
/// dumps the resulting document.
fn main() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let page = Page::new();
    let host = spawn_host(page.clone());

    let dock_page = page.clone();
    let dock = thread::spawn(move || dock_betslip(&dock_page, Duration::from_secs(10)));

    let enhancer = Enhancer::new(page.clone(), Config::from_env());
    enhancer.run();

    let _ = host.join();
    wait_for_content(
        &page,
        &[
            "artilheiros-copa",
            "ranking-artilheiros",
            "topscore-rankings",
            "standings-groups",
        ],
        Duration::from_secs(30),
    );

    // Walk through the interactive surface: knockout round trip, group
    // switch, terms toggle and a short drag on the odds strip.
    page.click("next-phase");
    page.select_option("group-select", 1);
    page.click("prev-phase");
    toggle_terms(&page);
    if let Some(odds) = page.find(&Selector::class(ODDS_SCROLL_CLASS)) {
        odds.set_scroll_x(200.0);
        let mut drag = DragScroll::new(odds);
        drag.press(150.0);
        drag.drag(90.0);
        drag.release();
    }

    drop(enhancer);
    let _ = dock.join();

    println!("{}", page.render_html());
    for line in page.logs() {
        eprintln!("{line}");
    }
}

fn wait_for_content(page: &Page, ids: &[&str], timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        let done = ids.iter().all(|id| {
            page.find_by_id(id)
                .map(|el| !el.html().is_empty())
                .unwrap_or(true)
        });
        if done {
            return;
        }
        thread::sleep(Duration::from_millis(25));
    }
}

fn spawn_host(page: Page) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(30));

        page.mount("h2", "phase-title").set_text("FASE DE GRUPOS");
        page.mount("p", "phase-description");
        page.mount("div", "phase-instruction");
        page.mount("button", "prev-phase").set_text("Anterior");
        page.mount("button", "next-phase").set_text("Próxima");

        let groups = page.mount("section", "group-phase-content");
        page.mount_child(&groups, "select", Some("group-select"));
        page.mount_child(&groups, "div", Some("standings-groups"));

        let knockout = page.mount("section", "knockout-phase-content");
        knockout.add_class("hidden");
        page.mount_child(&knockout, "div", Some("knockout-fixtures"));

        page.mount("div", "artilheiros-copa");
        page.set_ready(ReadyState::Interactive);

        // Sections a third-party widget script adds later.
        thread::sleep(Duration::from_millis(40));
        page.mount("div", "ranking-artilheiros");
        page.mount("div", "topscore-rankings");

        let terms = page.mount("div", "terms-content");
        terms.add_class("hidden");
        page.mount("span", "terms-icon").set_text("+");
        page.mount("span", "chevron-icon");
        page.mount_classed("div", &[ODDS_SCROLL_CLASS]);

        thread::sleep(Duration::from_millis(50));
        let container = page.mount_classed("div", &["view-widget-container-right"]);
        let betslip = page.mount_classed("div", &["betslip-desktop"]);
        container.append_child(&betslip);
        page.set_ready(ReadyState::Complete);
    })
}
