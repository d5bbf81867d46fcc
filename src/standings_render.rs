use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::html::{escape, placeholder};
use crate::page::Page;
use crate::standings_fetch::load_standings;
use crate::state::{DataOrigin, StandingsGroup};

pub const GROUP_SELECT_MOUNT: &str = "group-select";
pub const STANDINGS_MOUNT: &str = "standings-groups";

/// View state of the standings section: the fetched groups, where they
/// came from, and which group is currently shown. Selection is transient;
/// switching re-renders the whole table.
pub struct StandingsPanel {
    groups: Vec<StandingsGroup>,
    origin: DataOrigin,
    selected: usize,
}

impl StandingsPanel {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            origin: DataOrigin::Remote,
            selected: 0,
        }
    }

    pub fn set_data(&mut self, groups: Vec<StandingsGroup>, origin: DataOrigin) {
        self.groups = groups;
        self.origin = origin;
        self.selected = 0;
    }

    pub fn groups(&self) -> &[StandingsGroup] {
        &self.groups
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    pub fn selected(&self) -> usize {
        self.selected
    }
}

impl Default for StandingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point of the standings pipeline: waits for both mounts, loads
/// the groups (fallback on failure), fills the selector and shows the
/// first group.
pub fn start_standings(page: &Page, cfg: &Config, panel: &Arc<Mutex<StandingsPanel>>) {
    if let Err(err) = page.wait_for(GROUP_SELECT_MOUNT, cfg.mount_wait) {
        page.push_log(format!("[WARN] Standings skipped: {err}"));
        return;
    }
    if let Err(err) = page.wait_for(STANDINGS_MOUNT, cfg.mount_wait) {
        page.push_log(format!("[WARN] Standings skipped: {err}"));
        return;
    }

    let (groups, origin) = load_standings(cfg, page);
    {
        let mut guard = panel.lock().expect("standings panel lock poisoned");
        guard.set_data(groups, origin);
    }
    render_group_select(page, panel);
    render_standings_group(page, panel, 0);
}

pub fn render_group_select(page: &Page, panel: &Arc<Mutex<StandingsPanel>>) {
    let Some(select) = page.find_by_id(GROUP_SELECT_MOUNT) else {
        page.push_log("[ERROR] Group select mount missing");
        return;
    };

    let options = {
        let guard = panel.lock().expect("standings panel lock poisoned");
        let mut options = String::new();
        for (idx, group) in guard.groups.iter().enumerate() {
            if group.rows.is_empty() {
                continue;
            }
            options.push_str(&format!(
                "<option value=\"{idx}\">{}</option>",
                escape(&group.label)
            ));
        }
        options
    };

    if options.is_empty() {
        select.set_html("<option value=\"-1\">Nenhum grupo disponível</option>");
    } else {
        select.set_html(&options);
    }

    let page_cb = page.clone();
    let panel_cb = panel.clone();
    page.set_change_handler(GROUP_SELECT_MOUNT, move |idx| {
        render_standings_group(&page_cb, &panel_cb, idx);
    });
}

/// Renders exactly one group into the standings mount. Full clear and
/// rebuild, never a patch.
pub fn render_standings_group(page: &Page, panel: &Arc<Mutex<StandingsPanel>>, idx: usize) {
    let Some(container) = page.find_by_id(STANDINGS_MOUNT) else {
        page.push_log("[ERROR] Standings mount missing");
        return;
    };

    let (group, origin) = {
        let mut guard = panel.lock().expect("standings panel lock poisoned");
        guard.selected = idx;
        (guard.groups.get(idx).cloned(), guard.origin)
    };

    container.set_html("");
    let Some(group) = group.filter(|g| !g.rows.is_empty()) else {
        container.set_html("<p class='text-gray-500 p-4'>Nenhum dado disponível para este grupo.</p>");
        return;
    };

    container.append_html(&standings_table(&group));
    if origin == DataOrigin::Fallback {
        container
            .prepend_html("<p class='text-yellow-600 mb-4'>⚠️ Dados de demonstração (API indisponível)</p>");
    }
}

fn standings_table(group: &StandingsGroup) -> String {
    let mut rows = String::new();
    for team in &group.rows {
        rows.push_str(&format!(
            "<tr class='hover:bg-green-50 transition'>\
<td class='px-2 py-1 text-center font-semibold'>{rank}</td>\
<td class='px-2 py-1 flex items-center gap-2'><img src='{logo}' alt='{name}' class='w-6 h-6 inline-block rounded-full border' onerror=\"this.src='{logo_fallback}'\" />{name}</td>\
<td class='px-2 py-1 text-center font-bold text-green-700'>{points}</td>\
<td class='px-2 py-1 text-center'>{played}</td>\
<td class='px-2 py-1 text-center'>{win}</td>\
<td class='px-2 py-1 text-center'>{draw}</td>\
<td class='px-2 py-1 text-center'>{lose}</td>\
<td class='px-2 py-1 text-center'>{goals_for}</td>\
<td class='px-2 py-1 text-center'>{goals_against}</td>\
<td class='px-2 py-1 text-center'>{goals_diff}</td>\
</tr>",
            rank = team.rank,
            logo = escape(&team.team.logo),
            logo_fallback = placeholder("24x24"),
            name = escape(&team.team.name),
            points = team.points,
            played = team.played,
            win = team.win,
            draw = team.draw,
            lose = team.lose,
            goals_for = team.goals_for,
            goals_against = team.goals_against,
            goals_diff = team.goals_diff,
        ));
    }

    format!(
        "<div class='overflow-x-auto rounded-lg border border-gray-200 bg-white shadow mt-4'>\
<h3 class='text-lg font-bold text-green-700 mb-2 px-4 pt-4'>{label}</h3>\
<table class='min-w-[600px] w-full bg-white rounded-lg'>\
<thead class='bg-gradient-to-r from-gray-50 to-gray-100'>\
<tr>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>Pos</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider text-left'>Time</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>Pts</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>J</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>V</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>E</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>D</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>GP</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>GC</th>\
<th class='px-3 py-2 text-xs font-bold text-gray-700 uppercase tracking-wider'>SG</th>\
</tr>\
</thead>\
<tbody class='bg-white divide-y divide-gray-200'>{rows}</tbody>\
</table>\
</div>",
        label = escape(&group.label),
    )
}
