use std::env;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::page::Page;
use crate::phase::PhaseController;
use crate::scorer_render::{
    render_scorer_ranking, render_scorer_strip, render_topscore_panel, STRIP_LIMIT,
};
use crate::scorers_fetch::load_scorers;
use crate::standings_render::{start_standings, StandingsPanel};
use crate::state::{new_shared_scorers, summarize_scorers, top_scorers, SharedScorers};

pub const NAV_PREV: &str = "prev-phase";
pub const NAV_NEXT: &str = "next-phase";

const READY_TIMEOUT: Duration = Duration::from_secs(10);

/// Single owner of the enhancement pipeline: the page handle, config, the
/// published scorer mirror, the phase controller and the standings panel.
/// Render jobs run on a small pool and each owns a disjoint mount point.
pub struct Enhancer {
    page: Page,
    cfg: Config,
    scorers: SharedScorers,
    phase: Arc<Mutex<PhaseController>>,
    standings: Arc<Mutex<StandingsPanel>>,
    pool: Option<rayon::ThreadPool>,
}

impl Enhancer {
    pub fn new(page: Page, cfg: Config) -> Self {
        let phase = Arc::new(Mutex::new(PhaseController::new(page.clone(), cfg.clone())));
        Self {
            scorers: new_shared_scorers(),
            standings: Arc::new(Mutex::new(StandingsPanel::new())),
            pool: build_render_pool(),
            page,
            cfg,
            phase,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn scorers(&self) -> &SharedScorers {
        &self.scorers
    }

    pub fn phase(&self) -> &Arc<Mutex<PhaseController>> {
        &self.phase
    }

    pub fn standings(&self) -> &Arc<Mutex<StandingsPanel>> {
        &self.standings
    }

    /// Startup sequence: document readiness, scorer mirror, phase
    /// navigation, then the four section renders fired in parallel.
    pub fn run(&self) {
        if !self.page.wait_ready(READY_TIMEOUT) {
            self.page
                .push_log("[WARN] Document never became interactive, enhancement skipped");
            return;
        }

        self.publish_scorer_mirror();
        self.wire_phase_nav();

        let page = self.page.clone();
        let cfg = self.cfg.clone();
        let panel = self.standings.clone();
        self.spawn(move || start_standings(&page, &cfg, &panel));

        let page = self.page.clone();
        let cfg = self.cfg.clone();
        self.spawn(move || render_scorer_strip(&page, &cfg));

        let page = self.page.clone();
        let cfg = self.cfg.clone();
        self.spawn(move || render_scorer_ranking(&page, &cfg));

        let page = self.page.clone();
        let cfg = self.cfg.clone();
        self.spawn(move || render_topscore_panel(&page, &cfg));
    }

    fn publish_scorer_mirror(&self) {
        let entries = load_scorers(&self.cfg, &self.page);
        let top = top_scorers(&entries, Some(STRIP_LIMIT));
        *self.scorers.lock().expect("scorer mirror lock poisoned") = summarize_scorers(&top);
        self.page
            .push_log(format!("[INFO] Scorer mirror published: {} players", top.len()));
    }

    fn wire_phase_nav(&self) {
        if self.page.find_by_id(NAV_PREV).is_none() || self.page.find_by_id(NAV_NEXT).is_none() {
            self.page
                .push_log("[WARN] Phase navigation triggers missing, navigation not wired");
            return;
        }

        let ctrl = self.phase.clone();
        self.page.on_click(NAV_PREV, move || {
            ctrl.lock().expect("phase controller lock poisoned").back();
        });
        let ctrl = self.phase.clone();
        self.page.on_click(NAV_NEXT, move || {
            ctrl.lock()
                .expect("phase controller lock poisoned")
                .advance();
        });
    }

    fn spawn(&self, job: impl FnOnce() + Send + 'static) {
        if let Some(pool) = self.pool.as_ref() {
            pool.spawn(job);
        } else {
            thread::spawn(job);
        }
    }
}

fn build_render_pool() -> Option<rayon::ThreadPool> {
    let threads = env::var("RENDER_PARALLELISM")
        .ok()
        .and_then(|val| val.parse::<usize>().ok())
        .unwrap_or(4)
        .clamp(1, 8);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .ok()
}
