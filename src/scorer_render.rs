use crate::config::Config;
use crate::html::{escape, placeholder, placeholder_initial};
use crate::page::{ElementHandle, Page};
use crate::scorers_fetch::load_scorers;
use crate::state::{top_scorers, ScorerEntry};

pub const SCORER_STRIP_MOUNT: &str = "artilheiros-copa";
pub const SCORER_RANKING_MOUNT: &str = "ranking-artilheiros";
pub const TOPSCORE_PANEL_MOUNT: &str = "topscore-rankings";

pub const STRIP_LIMIT: usize = 10;
pub const TOPSCORE_LIMIT: usize = 15;

/// Horizontal card strip with the top ten scorers.
pub fn render_scorer_strip(page: &Page, cfg: &Config) {
    let mount = match page.wait_for(SCORER_STRIP_MOUNT, cfg.mount_wait) {
        Ok(mount) => mount,
        Err(err) => {
            page.push_log(format!("[WARN] Scorer strip skipped: {err}"));
            return;
        }
    };
    let entries = load_scorers(cfg, page);
    fill_scorer_strip(&mount, &entries);
}

pub fn fill_scorer_strip(mount: &ElementHandle, entries: &[ScorerEntry]) {
    let top = top_scorers(entries, Some(STRIP_LIMIT));
    mount.set_html("");
    for (idx, scorer) in top.iter().enumerate() {
        mount.append_html(&strip_card(idx, scorer));
    }
}

fn strip_card(idx: usize, scorer: &ScorerEntry) -> String {
    let name = escape(&scorer.name);
    let position = escape(&scorer.position);
    let goals = scorer.goals;
    format!(
        "<div class=\"flex-shrink-0 w-36 sm:w-40 md:w-48 lg:w-56 rounded-lg bg-gradient-to-b from-neutral-900 to-neutral-800 shadow-lg overflow-hidden flex flex-col items-center justify-between border border-amber-500/20\">\
<div class=\"flex flex-col items-center justify-center bg-gradient-to-r from-amber-600 to-amber-500 p-3 sm:p-4 w-full\">\
<div class=\"text-xl sm:text-2xl font-bold mb-1 sm:mb-2\">#{rank}</div>\
<img src=\"{photo}\" alt=\"{name}\" class=\"w-14 h-14 sm:w-16 sm:h-16 rounded-full border-2 border-white mb-1 sm:mb-2 object-cover shadow-md bg-white\" onerror=\"this.src='{photo_fallback}'\">\
<div class=\"flex items-center gap-1 mb-1 sm:mb-2\">\
<img src=\"{crest}\" alt=\"Escudo\" class=\"w-6 h-6 sm:w-8 sm:h-8 rounded-full border border-white object-cover\" onerror=\"this.src='{crest_fallback}'\">\
<span class=\"block text-xs font-semibold text-white/80 truncate max-w-[80px] sm:max-w-[100px]\">{position}</span>\
</div>\
<span class=\"block text-xl sm:text-2xl font-bold text-white\">{goals} <span class='text-sm sm:text-base font-normal'>{goals_word}</span></span>\
</div>\
<div class=\"p-2 sm:p-3 w-full text-center\">\
<h4 class=\"text-sm sm:text-base font-semibold text-amber-300 break-words leading-tight\">{name}</h4>\
</div>\
</div>",
        rank = idx + 1,
        photo = escape(&scorer.photo),
        photo_fallback = placeholder("64x64"),
        crest = escape(&scorer.crest),
        crest_fallback = placeholder("32x32"),
        goals_word = plural_goals(goals),
    )
}

/// Full ranking table: every scorer, ordinal ranks 1..N, top three rows
/// visually distinguished.
pub fn render_scorer_ranking(page: &Page, cfg: &Config) {
    let mount = match page.wait_for(SCORER_RANKING_MOUNT, cfg.mount_wait) {
        Ok(mount) => mount,
        Err(err) => {
            page.push_log(format!("[WARN] Scorer ranking skipped: {err}"));
            return;
        }
    };
    let entries = load_scorers(cfg, page);
    fill_scorer_ranking(&mount, &entries);
}

pub fn fill_scorer_ranking(mount: &ElementHandle, entries: &[ScorerEntry]) {
    let ranking = top_scorers(entries, None);
    let mut rows = String::new();
    for (idx, scorer) in ranking.iter().enumerate() {
        rows.push_str(&ranking_row(idx, scorer));
    }
    mount.set_html(&format!(
        "<div class='overflow-x-auto rounded-lg border border-gray-200 bg-white shadow mt-4'>\
<h3 class='text-lg font-bold text-amber-600 mb-2 px-4 pt-4'>🏆 Ranking de Artilheiros - Copa do Mundo de Clubes</h3>\
<table class='min-w-[600px] w-full bg-white rounded-lg'>\
<thead class='bg-gradient-to-r from-amber-50 to-amber-100'>\
<tr>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>Pos</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider text-left'>Jogador</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider text-left'>Posição</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>Gols</th>\
</tr>\
</thead>\
<tbody class='bg-white divide-y divide-gray-200'>{rows}</tbody>\
</table>\
</div>"
    ));
}

fn ranking_row(idx: usize, scorer: &ScorerEntry) -> String {
    let rank_color = if idx == 0 {
        "text-amber-600"
    } else if idx < 3 {
        "text-amber-500"
    } else {
        "text-gray-700"
    };
    let badge = if idx == 0 {
        "bg-amber-100 text-amber-800"
    } else if idx < 3 {
        "bg-yellow-100 text-yellow-800"
    } else {
        "bg-gray-100 text-gray-800"
    };
    let highlight = if idx < 3 { " bg-amber-25" } else { "" };
    let goals = scorer.goals;
    format!(
        "<tr class='hover:bg-amber-50 transition{highlight}'>\
<td class='px-2 sm:px-3 py-1 sm:py-2 text-center font-bold {rank_color}'>{rank}</td>\
<td class='px-2 sm:px-3 py-1 sm:py-2 flex items-center gap-2 sm:gap-3'>\
<img src='{photo}' alt='{name}' class='w-6 h-6 sm:w-8 sm:h-8 rounded-full border object-cover bg-white' onerror=\"this.src='{photo_fallback}'\" />\
<div class='flex flex-col'>\
<span class='font-semibold text-gray-900 text-sm sm:text-base'>{name}</span>\
<div class='flex items-center gap-1'>\
<img src='{crest}' alt='Escudo' class='w-3 h-3 sm:w-4 sm:h-4 rounded object-cover' onerror=\"this.src='{crest_fallback}'\" />\
<span class='text-xs text-gray-500'>Clube</span>\
</div>\
</div>\
</td>\
<td class='px-2 sm:px-3 py-1 sm:py-2 text-xs sm:text-sm text-gray-600'>{position}</td>\
<td class='px-2 sm:px-3 py-1 sm:py-2 text-center'>\
<span class='inline-flex items-center px-1.5 sm:px-2 py-0.5 sm:py-1 rounded-full text-xs font-medium {badge}'>{goals} {goals_word}</span>\
</td>\
</tr>",
        rank = idx + 1,
        photo = escape(&scorer.photo),
        photo_fallback = placeholder("32x32"),
        name = escape(&scorer.name),
        crest = escape(&scorer.crest),
        crest_fallback = placeholder("16x16"),
        position = escape(&scorer.position),
        goals_word = plural_goals(goals),
    )
}

/// Dark-themed top-15 list for the topscore section. When the mount never
/// appears a visible notice container is attached near the scorer strip.
pub fn render_topscore_panel(page: &Page, cfg: &Config) {
    let mount = match page.wait_for(TOPSCORE_PANEL_MOUNT, cfg.mount_wait) {
        Ok(mount) => mount,
        Err(err) => {
            page.push_log(format!("[WARN] Topscore panel skipped: {err}"));
            attach_topscore_notice(page);
            return;
        }
    };
    let entries = load_scorers(cfg, page);
    fill_topscore_panel(&mount, &entries);
}

pub fn fill_topscore_panel(mount: &ElementHandle, entries: &[ScorerEntry]) {
    let top = top_scorers(entries, Some(TOPSCORE_LIMIT));
    let mut players = String::new();
    for (idx, scorer) in top.iter().enumerate() {
        players.push_str(&topscore_row(idx, scorer));
    }
    mount.set_html(&format!(
        "<div class=\"w-full max-w-4xl flex flex-col justify-start items-start gap-1 sm:gap-2\">\
<div class=\"w-full h-8 sm:h-10 py-2 sm:py-2.5 border-t border-b border-white inline-flex justify-start items-center gap-2\">\
<div class=\"flex-1 justify-center text-white text-sm sm:text-base font-normal uppercase leading-tight\">ranking</div>\
<div class=\"text-right justify-center text-white text-sm sm:text-base font-normal uppercase leading-tight\">gols</div>\
</div>\
</div>\
<div class=\"w-full max-w-4xl flex-1 border-b border-white flex flex-col justify-start items-start overflow-y-auto max-h-[300px] sm:max-h-[400px] scrollbar-thin\">{players}</div>"
    ));
}

fn topscore_row(idx: usize, scorer: &ScorerEntry) -> String {
    let is_top3 = idx < 3;
    let rank_color = if is_top3 { "text-amber-400" } else { "text-white/50" };
    let photo_border = if is_top3 {
        "border-2 border-amber-400"
    } else {
        "border border-white/20"
    };
    let goals_color = if is_top3 { "text-amber-400" } else { "text-white" };
    format!(
        "<div class=\"w-full py-2 sm:py-3.5 border-b border-white inline-flex justify-start items-center gap-2 sm:gap-4 hover:bg-white/5 transition-colors duration-200\">\
<div class=\"w-6 sm:w-8 h-7 justify-center {rank_color} text-2xl sm:text-3xl font-normal\">{rank}</div>\
<div class=\"flex justify-start items-center gap-1 sm:gap-2 ml-1 sm:ml-2\">\
<img class=\"w-10 h-10 sm:w-12 sm:h-12 relative rounded-[80px] {photo_border} object-cover bg-white\" src=\"{photo}\" alt=\"{name}\" onerror=\"this.src='{photo_fallback}'\" />\
<img class=\"w-5 h-5 sm:w-6 sm:h-6 relative object-cover rounded\" src=\"{crest}\" alt=\"Escudo do time\" onerror=\"this.src='{crest_fallback}'\" />\
</div>\
<div class=\"flex-1 min-w-0 inline-flex flex-col justify-start items-start\">\
<div class=\"w-full justify-start text-white text-lg sm:text-xl font-normal overflow-hidden whitespace-nowrap text-ellipsis\">{name}</div>\
<div class=\"w-full justify-start text-white/50 text-[9px] sm:text-[10px] font-bold uppercase overflow-hidden whitespace-nowrap text-ellipsis\">{position}</div>\
</div>\
<div class=\"w-12 sm:w-16 text-right justify-center {goals_color} text-xl sm:text-2xl font-bold leading-relaxed\">{goals}</div>\
</div>",
        rank = idx + 1,
        photo = escape(&scorer.photo),
        name = escape(&scorer.name),
        photo_fallback = placeholder_initial("48x48", &scorer.name),
        crest = escape(&scorer.crest),
        crest_fallback = "https://via.placeholder.com/24x24/374151/9CA3AF?text=?",
        position = escape(&scorer.position),
        goals = scorer.goals,
    )
}

fn attach_topscore_notice(page: &Page) {
    let anchor = page
        .find_by_id(SCORER_STRIP_MOUNT)
        .and_then(|strip| strip.parent())
        .unwrap_or_else(|| page.body());
    let notice = page.mount_child(&anchor, "div", Some("topscore-rankings-fallback"));
    for class in ["p-4", "text-white", "bg-red-900/20", "rounded", "mx-4", "my-2"] {
        notice.add_class(class);
    }
    notice.set_html(
        "<p>⚠️ Seção de artilheiros não encontrada no HTML. Verifique se o elemento #topscore-rankings existe.</p>",
    );
}

fn plural_goals(goals: u32) -> &'static str {
    if goals == 1 { "gol" } else { "gols" }
}
