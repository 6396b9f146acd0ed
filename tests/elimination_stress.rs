use baseball_elimination::utils::random_league::{generate_league, LeagueParameters};
use baseball_elimination::{
    validate_certificate, Division, EliminationConfig, League, SearchStrategy, TeamId, TeamRecord,
};

fn run_division(league: League, search: SearchStrategy) {
    let sequential = Division::new(
        league.clone(),
        EliminationConfig {
            search,
            ..EliminationConfig::default()
        },
    );
    let parallel = Division::new(
        league,
        EliminationConfig {
            search,
            parallel: true,
            ..EliminationConfig::default()
        },
    );

    let expected = sequential.evaluate_all().unwrap();
    let verdicts = parallel.evaluate_all().unwrap();
    assert_eq!(verdicts, expected);

    for verdict in &verdicts {
        if let Some(certificate) = verdict.certificate() {
            let check = validate_certificate(sequential.league(), verdict.team, certificate);
            assert!(check.is_valid(), "invalid certificate for {:?}: {check:?}", verdict.team);
        }
    }
}

fn tight_league(teams: usize, seed: u64) -> League {
    let params = LeagueParameters {
        win_spread: 4,
        ..LeagueParameters::new(teams, seed)
    };
    generate_league(&params).unwrap()
}

/// Every club has three games left against every other club and wins sit in
/// a narrow band, so most verdicts go through the flow network.
fn chasing_pack(teams: usize) -> League {
    let records = (0..teams)
        .map(|i| {
            let against: Vec<i64> = (0..teams).map(|j| if i == j { 0 } else { 3 }).collect();
            let remaining = against.iter().sum();
            let wins = if i == 0 { 80 } else { 80 - 2 * i as i64 % 17 };
            TeamRecord::new(format!("Club_{i:03}"), wins, 60, remaining, against)
        })
        .collect();
    League::from_records(records).unwrap()
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-division runs"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn forty_team_division_agrees_across_modes() {
    for seed in 0..4 {
        run_division(tight_league(40, seed), SearchStrategy::BreadthFirst);
    }
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-division runs"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn sixty_team_division_with_depth_first_search() {
    run_division(tight_league(60, 99), SearchStrategy::DepthFirst);
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-division runs"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn chasing_pack_of_fifty() {
    let league = chasing_pack(50);
    let division = Division::new(league.clone(), EliminationConfig::default());
    assert!(!division.verdict_of(TeamId(0)).unwrap().is_eliminated());
    run_division(league, SearchStrategy::BreadthFirst);
}
