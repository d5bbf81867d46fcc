use chrono::DateTime;

use crate::config::Config;
use crate::fixtures_fetch::load_fixtures;
use crate::html::{escape, placeholder};
use crate::page::{ElementHandle, Page};
use crate::state::Fixture;

pub const FIXTURES_MOUNT: &str = "knockout-fixtures";

/// Knockout fixtures list. Unlike the other renderers this one checks its
/// mount synchronously and aborts without waiting.
pub fn render_knockout_fixtures(page: &Page, cfg: &Config) {
    let Some(mount) = page.find_by_id(FIXTURES_MOUNT) else {
        page.push_log("[ERROR] Knockout fixtures mount missing");
        return;
    };
    let fixtures = load_fixtures(cfg, page);
    fill_fixtures(&mount, &fixtures);
}

pub fn fill_fixtures(mount: &ElementHandle, fixtures: &[Fixture]) {
    mount.set_html("");
    if fixtures.is_empty() {
        mount.set_html(
            "<div class=\"w-full text-center py-8\">\
<p class=\"text-gray-600\">Nenhuma partida das oitavas de final disponível ainda.</p>\
</div>",
        );
        return;
    }
    for (idx, fixture) in fixtures.iter().enumerate() {
        mount.append_html(&fixture_card(idx, fixture));
    }
}

/// Maps the feed's short status codes to display labels. Unknown codes
/// fall back to the long status, then to a generic label.
pub fn status_label(short: &str, long: Option<&str>) -> String {
    let label = match short {
        "NS" => "A REALIZAR",
        "FT" => "ENCERRADO",
        "LIVE" => "AO VIVO",
        "HT" => "INTERVALO",
        "PST" => "ADIADO",
        "CANC" => "CANCELADO",
        "SUSP" => "SUSPENSO",
        "ABD" => "ABANDONADO",
        "TBD" => "A DEFINIR",
        "SCHEDULED" => "AGENDADO",
        _ => {
            return long
                .filter(|l| !l.trim().is_empty())
                .map(|l| l.to_uppercase())
                .unwrap_or_else(|| "AGENDADO".to_string());
        }
    };
    label.to_string()
}

pub fn status_badge_class(short: &str) -> &'static str {
    match short {
        "NS" | "TBD" | "SCHEDULED" => "bg-blue-100 text-blue-800",
        "FT" | "CANC" | "ABD" => "bg-gray-100 text-gray-800",
        "LIVE" | "HT" => "bg-red-100 text-red-800",
        "PST" | "SUSP" => "bg-yellow-100 text-yellow-800",
        _ => "bg-green-100 text-green-800",
    }
}

/// Splits an RFC 3339 kickoff into date and time parts; a date that does
/// not parse is shown raw.
pub fn format_kickoff(raw: &str) -> (String, Option<String>) {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => (
            dt.format("%d/%m/%Y").to_string(),
            Some(dt.format("%H:%M").to_string()),
        ),
        Err(_) => (raw.to_string(), None),
    }
}

fn fixture_card(idx: usize, fixture: &Fixture) -> String {
    let (date, time) = format_kickoff(&fixture.date);
    let date_line = match time {
        Some(time) => format!("{date} às {time}"),
        None => date,
    };
    let label = status_label(&fixture.status_short, fixture.status_long.as_deref());
    let badge = status_badge_class(&fixture.status_short);
    let pending = fixture.status_short == "NS";
    let score_color = if pending { "text-gray-300" } else { "text-gray-800" };
    let home_goals = fixture
        .goals_home
        .map(|g| g.to_string())
        .unwrap_or_else(|| "-".to_string());
    let away_goals = fixture
        .goals_away
        .map(|g| g.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "<div class=\"w-full bg-white rounded-lg shadow-md overflow-hidden border border-gray-200 hover:shadow-lg transition-shadow duration-300\">\
<div class=\"px-4 py-3 bg-gradient-to-r from-amber-50 to-amber-100 border-b border-gray-200\">\
<div class=\"flex justify-between items-center\">\
<span class=\"text-sm font-medium text-gray-600\">Oitavas de Final #{number}</span>\
<span class=\"inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {badge}\">{label}</span>\
</div>\
<div class=\"text-xs text-gray-500 mt-1\">{date_line}</div>\
</div>\
<div class=\"p-4\">\
<div class=\"flex items-center justify-between mb-4\">\
<div class=\"flex items-center w-5/12 justify-end\">\
<div class=\"text-right mr-3\">\
<div class=\"font-semibold text-sm sm:text-base break-words sm:whitespace-nowrap max-w-[120px] sm:max-w-full\">{home_name}</div>\
</div>\
<img src=\"{home_logo}\" alt=\"{home_name}\" class=\"w-8 h-8 sm:w-10 sm:h-10 object-contain\" onerror=\"this.src='{logo_fallback}'\">\
</div>\
<div class=\"flex items-center justify-center w-2/12\">\
<div class=\"flex items-center justify-center gap-1 sm:gap-2\">\
<span class=\"font-bold text-lg sm:text-xl {score_color}\">{home_goals}</span>\
<span class=\"font-bold text-lg sm:text-xl text-gray-400\">x</span>\
<span class=\"font-bold text-lg sm:text-xl {score_color}\">{away_goals}</span>\
</div>\
</div>\
<div class=\"flex items-center w-5/12\">\
<img src=\"{away_logo}\" alt=\"{away_name}\" class=\"w-8 h-8 sm:w-10 sm:h-10 object-contain\" onerror=\"this.src='{logo_fallback}'\">\
<div class=\"ml-3\">\
<div class=\"font-semibold text-sm sm:text-base break-words sm:whitespace-nowrap max-w-[120px] sm:max-w-full\">{away_name}</div>\
</div>\
</div>\
</div>\
<div class=\"mt-3 flex justify-center\">\
<a href=\"#\" class=\"inline-flex items-center justify-center px-4 py-2 bg-amber-500 text-white text-sm font-medium rounded-md hover:bg-amber-600 transition-colors duration-300 shadow\">\
<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"h-4 w-4 mr-1\" fill=\"none\" viewBox=\"0 0 24 24\" stroke=\"currentColor\">\
<path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\" d=\"M13 7h8m0 0v8m0-8l-8 8-4-4-6 6\" />\
</svg>\
Apostar neste jogo\
</a>\
</div>\
</div>\
</div>",
        number = idx + 1,
        home_name = escape(&fixture.home.name),
        home_logo = escape(&fixture.home.logo),
        away_name = escape(&fixture.away.name),
        away_logo = escape(&fixture.away.logo),
        logo_fallback = placeholder("40x40"),
        date_line = escape(&date_line),
    )
}
