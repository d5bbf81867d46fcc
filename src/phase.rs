use crate::config::Config;
use crate::fixtures_render::render_knockout_fixtures;
use crate::page::Page;

pub const GROUP_SECTION: &str = "group-phase-content";
pub const KNOCKOUT_SECTION: &str = "knockout-phase-content";
pub const PHASE_TITLE: &str = "phase-title";
pub const PHASE_DESCRIPTION: &str = "phase-description";
pub const PHASE_INSTRUCTION: &str = "phase-instruction";

const GROUPS_TITLE: &str = "FASE DE GRUPOS";
const GROUPS_DESCRIPTION: &str =
    "32 times divididos em 8 grupos de 4. Os dois melhores de cada grupo avançam para a próxima fase.";
const GROUPS_INSTRUCTION: &str = "<svg width=\"20\" height=\"20\" viewBox=\"0 0 20 20\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\">\
<path d=\"M19.2162 13.1769C18.9234 13.1683 18.7137 12.9422 18.7055 12.6411C18.6134 8.99971 16.7384 6.30436 13.8923 5.24971L11.9423 10.6069C11.9255 10.6486 11.9337 10.6822 11.9755 10.699C12.0091 10.7158 12.0341 10.699 12.0595 10.674L13.047 9.60257C13.6916 8.90757 14.512 8.85757 15.148 9.39329C15.868 10.004 15.8766 10.9165 15.173 11.779L12.3691 15.169C10.2512 17.7304 7.76552 18.5254 4.98624 17.5126C1.66302 16.3072 0.248381 13.2604 1.58802 9.57721L2.21552 7.8615C2.86838 6.04507 4.11552 5.30007 5.58052 5.81079C5.9741 5.30007 6.57695 5.12436 7.22945 5.35864C7.46411 5.44836 7.68413 5.57246 7.88231 5.72686C8.30945 5.17436 8.97052 4.97329 9.65731 5.21614C9.84458 5.28786 10.0218 5.38354 10.1845 5.50079L11.1387 2.88936C11.4984 1.89293 12.4027 1.47471 13.3316 1.80936C14.2691 2.15257 14.6877 3.04864 14.328 4.04436L14.2609 4.22864C17.5002 5.44221 19.752 8.56436 19.752 12.6244C19.752 12.9254 19.5009 13.1851 19.2162 13.1769Z\" fill=\"black\" />\
</svg>\
<p style=\"padding-left: 0.5rem;\">Toque e selecione um grupo</p>";

const KNOCKOUT_TITLE: &str = "OITAVAS DE FINAL";
const KNOCKOUT_DESCRIPTION: &str =
    "Os 16 melhores times do torneio se enfrentam em partidas eliminatórias.";
const KNOCKOUT_INSTRUCTION: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" fill=\"none\" viewBox=\"0 0 24 24\" stroke-width=\"1.5\" stroke=\"currentColor\" class=\"w-5 h-5\">\
<path stroke-linecap=\"round\" stroke-linejoin=\"round\" d=\"M11.25 11.25l.041-.02a.75.75 0 011.063.852l-.708 2.836a.75.75 0 001.063.853l.041-.021M21 12a9 9 0 11-18 0 9 9 0 0118 0zm-9-3.75h.008v.008H12V8.25z\" />\
</svg>\
<p style=\"padding-left: 0.5rem;\">Veja os confrontos das oitavas de final</p>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Groups,
    Knockout,
}

/// Two-state display controller for the group/knockout sections. Owns the
/// phase flag and the fixtures latch; callers hold it behind a mutex and
/// hand clones of that handle to the navigation listeners.
pub struct PhaseController {
    page: Page,
    cfg: Config,
    phase: Phase,
    fixtures_populated: bool,
}

impl PhaseController {
    pub fn new(page: Page, cfg: Config) -> Self {
        Self {
            page,
            cfg,
            phase: Phase::Groups,
            fixtures_populated: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fixtures_populated(&self) -> bool {
        self.fixtures_populated
    }

    /// Forward navigation: only acts while showing the group stage.
    pub fn advance(&mut self) {
        if self.phase == Phase::Groups {
            self.toggle();
        }
    }

    /// Backward navigation: only acts while showing the knockout stage.
    pub fn back(&mut self) {
        if self.phase == Phase::Knockout {
            self.toggle();
        }
    }

    pub fn toggle(&mut self) {
        match self.phase {
            Phase::Groups => self.enter_knockout(),
            Phase::Knockout => self.enter_groups(),
        }
    }

    fn enter_knockout(&mut self) {
        self.phase = Phase::Knockout;
        self.set_hidden(GROUP_SECTION, true);
        self.set_hidden(KNOCKOUT_SECTION, false);
        self.set_text(PHASE_TITLE, KNOCKOUT_TITLE);
        self.set_text(PHASE_DESCRIPTION, KNOCKOUT_DESCRIPTION);
        self.set_html(PHASE_INSTRUCTION, KNOCKOUT_INSTRUCTION);

        // The fixtures list is fetched at most once; repeated toggling
        // must not race a second render against the same mount.
        if !self.fixtures_populated {
            render_knockout_fixtures(&self.page, &self.cfg);
            self.fixtures_populated = true;
        }
    }

    fn enter_groups(&mut self) {
        self.phase = Phase::Groups;
        self.set_hidden(GROUP_SECTION, false);
        self.set_hidden(KNOCKOUT_SECTION, true);
        self.set_text(PHASE_TITLE, GROUPS_TITLE);
        self.set_text(PHASE_DESCRIPTION, GROUPS_DESCRIPTION);
        self.set_html(PHASE_INSTRUCTION, GROUPS_INSTRUCTION);
    }

    fn set_hidden(&self, id: &str, hidden: bool) {
        let Some(element) = self.page.find_by_id(id) else {
            self.page.push_log(format!("[WARN] Phase section missing: #{id}"));
            return;
        };
        if hidden {
            element.add_class("hidden");
        } else {
            element.remove_class("hidden");
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.page.find_by_id(id) {
            element.set_text(text);
        }
    }

    fn set_html(&self, id: &str, html: &str) {
        if let Some(element) = self.page.find_by_id(id) {
            element.set_html(html);
        }
    }
}
