use crate::state::{Fixture, ScorerEntry, StandingsGroup, TeamRef, TeamStanding};

// Fixed substitute datasets, shaped exactly like parsed remote payloads.
// Renderers receive these whenever a fetch fails, so they never have to
// handle an empty feed.

pub fn seed_scorers() -> Vec<ScorerEntry> {
    vec![
        scorer(
            "Musiala",
            "https://s.sde.globo.com/media/person_role/2024/06/14/photo_140x140_jGREsGd.png",
            "https://s.sde.globo.com/media/organizations/2017/09/22/Bayer-Munique-65.png",
            "Meio-campo",
            3,
        ),
        scorer(
            "Coman",
            "https://s.sde.globo.com/media/person_role/2019/03/13/e3906271f3caccb8796dc63477b6a451_140x140.png",
            "https://s.sde.globo.com/media/organizations/2017/09/22/Bayer-Munique-65.png",
            "Atacante",
            2,
        ),
        scorer(
            "Kolo Muani",
            "https://s.sde.globo.com/media/person_role/2022/11/01/photo_140x140_yB5pM4u.png",
            "https://s.sde.globo.com/media/organizations/2025/06/09/Juventus-65x65.png",
            "Atacante",
            2,
        ),
        scorer(
            "Messi",
            "https://s.sde.globo.com/media/person_role/2019/04/16/2144ecb394516ea16dcf9b465a1bdefe_140x140.png",
            "https://s.sde.globo.com/media/organizations/2023/07/25/inter-miami-65x65-62396.png",
            "Atacante",
            1,
        ),
        scorer(
            "Lautaro Martínez",
            "https://s.sde.globo.com/media/person_role/2020/06/13/7f7d74c23caddf25e45fc48416ddc6d7_140x140.png",
            "https://s.sde.globo.com/media/organizations/2021/03/31/65_Inter_de_Milão_2021.png",
            "Atacante",
            1,
        ),
    ]
}

pub fn seed_standings() -> Vec<StandingsGroup> {
    vec![
        StandingsGroup {
            label: "Grupo A".to_string(),
            rows: vec![
                standing(
                    1,
                    "Manchester City",
                    "https://logos-world.net/wp-content/uploads/2020/06/Manchester-City-Logo.png",
                    9,
                    3,
                    3,
                    0,
                    0,
                    8,
                    2,
                ),
                standing(
                    2,
                    "Juventus",
                    "https://logos-world.net/wp-content/uploads/2020/06/Juventus-Logo.png",
                    6,
                    3,
                    2,
                    0,
                    1,
                    5,
                    3,
                ),
                standing(
                    3,
                    "Wydad AC",
                    "https://upload.wikimedia.org/wikipedia/en/thumb/8/8b/Wydad_AC_logo.svg/1200px-Wydad_AC_logo.svg.png",
                    3,
                    3,
                    1,
                    0,
                    2,
                    3,
                    5,
                ),
                standing(
                    4,
                    "Al Ain FC",
                    "https://upload.wikimedia.org/wikipedia/en/thumb/1/1b/Al_Ain_FC_logo.svg/1200px-Al_Ain_FC_logo.svg.png",
                    0,
                    3,
                    0,
                    0,
                    3,
                    1,
                    7,
                ),
            ],
        },
        StandingsGroup {
            label: "Grupo B".to_string(),
            rows: vec![
                standing(
                    1,
                    "Real Madrid",
                    "https://logos-world.net/wp-content/uploads/2020/06/Real-Madrid-Logo.png",
                    9,
                    3,
                    3,
                    0,
                    0,
                    7,
                    1,
                ),
                standing(
                    2,
                    "Borussia Dortmund",
                    "https://logos-world.net/wp-content/uploads/2020/06/Borussia-Dortmund-Logo.png",
                    6,
                    3,
                    2,
                    0,
                    1,
                    4,
                    3,
                ),
                standing(
                    3,
                    "Pachuca",
                    "https://upload.wikimedia.org/wikipedia/en/thumb/b/b5/Pachuca_logo.svg/1200px-Pachuca_logo.svg.png",
                    3,
                    3,
                    1,
                    0,
                    2,
                    2,
                    4,
                ),
                standing(
                    4,
                    "Al Hilal",
                    "https://upload.wikimedia.org/wikipedia/en/thumb/1/1b/Al_Hilal_FC_logo.svg/1200px-Al_Hilal_FC_logo.svg.png",
                    0,
                    3,
                    0,
                    0,
                    3,
                    1,
                    6,
                ),
            ],
        },
    ]
}

pub fn seed_fixtures() -> Vec<Fixture> {
    vec![
        fixture(1001, "2025-06-30T20:00:00+00:00", 50, "Manchester City", 496, "Juventus"),
        fixture(1002, "2025-07-01T20:00:00+00:00", 541, "Real Madrid", 165, "Borussia Dortmund"),
        fixture(1003, "2025-07-02T20:00:00+00:00", 49, "Chelsea", 157, "Bayern Munich"),
        fixture(1004, "2025-07-03T20:00:00+00:00", 529, "Barcelona", 85, "Paris Saint Germain"),
        fixture(1005, "2025-07-04T20:00:00+00:00", 33, "Manchester United", 505, "Inter"),
        fixture(1006, "2025-07-05T20:00:00+00:00", 40, "Liverpool", 499, "Napoli"),
        fixture(1007, "2025-07-06T20:00:00+00:00", 42, "Arsenal", 489, "AC Milan"),
        fixture(1008, "2025-07-07T20:00:00+00:00", 47, "Tottenham", 530, "Atletico Madrid"),
    ]
}

fn scorer(name: &str, photo: &str, crest: &str, position: &str, goals: u32) -> ScorerEntry {
    ScorerEntry {
        name: name.to_string(),
        photo: photo.to_string(),
        crest: crest.to_string(),
        position: position.to_string(),
        goals,
    }
}

#[allow(clippy::too_many_arguments)]
fn standing(
    rank: u32,
    name: &str,
    logo: &str,
    points: i32,
    played: u32,
    win: u32,
    draw: u32,
    lose: u32,
    goals_for: u32,
    goals_against: u32,
) -> TeamStanding {
    TeamStanding {
        rank,
        team: TeamRef {
            name: name.to_string(),
            logo: logo.to_string(),
        },
        points,
        played,
        win,
        draw,
        lose,
        goals_for,
        goals_against,
        goals_diff: goals_for as i32 - goals_against as i32,
        group: None,
    }
}

fn fixture(id: u64, date: &str, home_id: u32, home: &str, away_id: u32, away: &str) -> Fixture {
    Fixture {
        id,
        date: date.to_string(),
        status_short: "NS".to_string(),
        status_long: None,
        home: TeamRef {
            name: home.to_string(),
            logo: format!("https://media.api-sports.io/football/teams/{home_id}.png"),
        },
        away: TeamRef {
            name: away.to_string(),
            logo: format!("https://media.api-sports.io/football/teams/{away_id}.png"),
        },
        goals_home: None,
        goals_away: None,
    }
}
