//! Static directory of NBA franchises

use crate::{GamelineError, Result, Team, TeamId};

/// (stats API id, full name, abbreviation, nickname, city)
const FRANCHISES: [(i64, &str, &str, &str, &str); 30] = [
    (1610612737, "Atlanta Hawks", "ATL", "Hawks", "Atlanta"),
    (1610612738, "Boston Celtics", "BOS", "Celtics", "Boston"),
    (1610612739, "Cleveland Cavaliers", "CLE", "Cavaliers", "Cleveland"),
    (1610612740, "New Orleans Pelicans", "NOP", "Pelicans", "New Orleans"),
    (1610612741, "Chicago Bulls", "CHI", "Bulls", "Chicago"),
    (1610612742, "Dallas Mavericks", "DAL", "Mavericks", "Dallas"),
    (1610612743, "Denver Nuggets", "DEN", "Nuggets", "Denver"),
    (1610612744, "Golden State Warriors", "GSW", "Warriors", "Golden State"),
    (1610612745, "Houston Rockets", "HOU", "Rockets", "Houston"),
    (1610612746, "Los Angeles Clippers", "LAC", "Clippers", "Los Angeles"),
    (1610612747, "Los Angeles Lakers", "LAL", "Lakers", "Los Angeles"),
    (1610612748, "Miami Heat", "MIA", "Heat", "Miami"),
    (1610612749, "Milwaukee Bucks", "MIL", "Bucks", "Milwaukee"),
    (1610612750, "Minnesota Timberwolves", "MIN", "Timberwolves", "Minnesota"),
    (1610612751, "Brooklyn Nets", "BKN", "Nets", "Brooklyn"),
    (1610612752, "New York Knicks", "NYK", "Knicks", "New York"),
    (1610612753, "Orlando Magic", "ORL", "Magic", "Orlando"),
    (1610612754, "Indiana Pacers", "IND", "Pacers", "Indiana"),
    (1610612755, "Philadelphia 76ers", "PHI", "76ers", "Philadelphia"),
    (1610612756, "Phoenix Suns", "PHX", "Suns", "Phoenix"),
    (1610612757, "Portland Trail Blazers", "POR", "Trail Blazers", "Portland"),
    (1610612758, "Sacramento Kings", "SAC", "Kings", "Sacramento"),
    (1610612759, "San Antonio Spurs", "SAS", "Spurs", "San Antonio"),
    (1610612760, "Oklahoma City Thunder", "OKC", "Thunder", "Oklahoma City"),
    (1610612761, "Toronto Raptors", "TOR", "Raptors", "Toronto"),
    (1610612762, "Utah Jazz", "UTA", "Jazz", "Utah"),
    (1610612763, "Memphis Grizzlies", "MEM", "Grizzlies", "Memphis"),
    (1610612764, "Washington Wizards", "WAS", "Wizards", "Washington"),
    (1610612765, "Detroit Pistons", "DET", "Pistons", "Detroit"),
    (1610612766, "Charlotte Hornets", "CHA", "Hornets", "Charlotte"),
];

/// All franchises, sorted by full name
pub fn all_teams() -> Vec<Team> {
    let mut teams: Vec<Team> = FRANCHISES
        .iter()
        .map(|&(id, name, abbreviation, nickname, city)| Team {
            id: TeamId(id),
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            nickname: nickname.to_string(),
            city: city.to_string(),
        })
        .collect();
    teams.sort_by(|a, b| a.name.cmp(&b.name));
    teams
}

/// Look up a team by full name, abbreviation or nickname
pub fn find_team(name: &str) -> Option<Team> {
    all_teams().into_iter().find(|t| t.matches_name(name))
}

/// Look up a team, failing with `UnknownTeam` on a miss
pub fn resolve_team(name: &str) -> Result<Team> {
    find_team(name).ok_or_else(|| GamelineError::UnknownTeam(name.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_directory_is_unique() {
        let teams = all_teams();
        assert_eq!(teams.len(), 30);

        let ids: HashSet<_> = teams.iter().map(|t| t.id).collect();
        let abbreviations: HashSet<_> = teams.iter().map(|t| t.abbreviation.clone()).collect();
        let nicknames: HashSet<_> = teams.iter().map(|t| t.nickname.to_lowercase()).collect();
        assert_eq!(ids.len(), 30);
        assert_eq!(abbreviations.len(), 30);
        assert_eq!(nicknames.len(), 30);
    }

    #[test]
    fn test_find_by_full_name() {
        let team = find_team("golden state warriors").unwrap();
        assert_eq!(team.id, TeamId(1610612744));
    }

    #[test]
    fn test_find_by_alias() {
        assert_eq!(find_team("OKC").unwrap().name, "Oklahoma City Thunder");
        assert_eq!(find_team("trail blazers").unwrap().abbreviation, "POR");
    }

    #[test]
    fn test_city_alone_is_ambiguous() {
        assert!(find_team("Los Angeles").is_none());
    }

    #[test]
    fn test_resolve_unknown() {
        match resolve_team(" Seattle SuperSonics ") {
            Err(GamelineError::UnknownTeam(name)) => assert_eq!(name, "Seattle SuperSonics"),
            other => panic!("expected UnknownTeam, got {:?}", other),
        }
    }
}
