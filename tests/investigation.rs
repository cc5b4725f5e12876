use detective_quest::explore::Choice;
use detective_quest::explore::Explorer;
use detective_quest::explore::NavigationError;
use detective_quest::explore::Step;
use detective_quest::explore::explore;
use detective_quest::game::Event;
use detective_quest::game::Session;
use detective_quest::ledger::Ledger;
use detective_quest::mansion::Room;
use detective_quest::mansion::Scenario;
use detective_quest::mansion::Side;
use detective_quest::players::Scripted;
use detective_quest::players::Wanderer;
use detective_quest::suspects::SuspectIndex;
use detective_quest::verdict::AccusationError;
use detective_quest::verdict::Verdict;

fn hall() -> Room {
    Room::new("Hall", "Pegada de sapato").with_left(
        Room::new("Estar", "Vidro com impressão").with_left(Room::new("Cozinha", "Copo quebrado")),
    )
}

fn index() -> SuspectIndex {
    [
        ("Pegada de sapato", "Sr. Silva"),
        ("Vidro com impressão", "Sra. Pereira"),
        ("Copo quebrado", "Sra. Pereira"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn one_clue_against_the_accused_is_not_enough() {
    let hall = hall();
    let mut ledger = Ledger::new();
    explore(&hall, &mut ledger, [Choice::LEFT, Choice::End]).for_each(drop);
    assert_eq!(
        ledger.iter().collect::<Vec<_>>(),
        vec!["Pegada de sapato", "Vidro com impressão"]
    );
    let verdict = Verdict::evaluate(&ledger, &index(), "Sra. Pereira").expect("named");
    assert_eq!(verdict.matches(), 1);
    assert!(!verdict.sustained());
}

#[test]
fn two_clues_against_the_accused_sustain() {
    let hall = hall();
    let mut ledger = Ledger::new();
    explore(&hall, &mut ledger, [Choice::LEFT, Choice::LEFT, Choice::End]).for_each(drop);
    assert_eq!(ledger.len(), 3);
    let verdict = Verdict::evaluate(&ledger, &index(), "Sra. Pereira").expect("named");
    assert_eq!(verdict.matches(), 2);
    assert!(verdict.sustained());
}

#[test]
fn nameless_accusation_has_no_tally() {
    let hall = hall();
    let mut ledger = Ledger::new();
    explore(&hall, &mut ledger, [Choice::LEFT, Choice::LEFT, Choice::End]).for_each(drop);
    assert_eq!(
        Verdict::evaluate(&ledger, &index(), ""),
        Err(AccusationError::Empty)
    );
}

#[test]
fn blocked_move_then_two_choices_agree_with_the_old_position() {
    let hall = hall();
    let mut ledger = Ledger::new();
    let mut explorer = Explorer::new(&hall, &mut ledger);
    explorer.enter();
    assert_eq!(
        explorer.step(Choice::RIGHT),
        Err(NavigationError::NoPath(Side::Right))
    );
    assert_eq!(
        explorer.step(Choice::RIGHT),
        Err(NavigationError::NoPath(Side::Right))
    );
    match explorer.step(Choice::LEFT) {
        Ok(Step::Moved(visit)) => assert_eq!(visit.room.name(), "Estar"),
        other => panic!("expected to reach Estar, got {:?}", other),
    }
}

#[test]
fn rooms_walked_stay_readable_next_to_the_ledger() {
    let scenario = Scenario::classic();
    let mut ledger = Ledger::new();
    let rooms = explore(scenario.entrance(), &mut ledger, [Choice::LEFT, Choice::End])
        .map(|visit| visit.room.name())
        .collect::<Vec<_>>();
    assert_eq!(ledger.len(), 2);
    assert_eq!(rooms, vec!["Hall de Entrada", "Sala de Estar"]);
    assert_eq!(
        ledger.iter().collect::<Vec<_>>(),
        vec!["Pegada de sapato", "Vidro com impressão"]
    );
}

#[test]
fn classic_case_by_script() {
    let scenario = Scenario::classic();
    let mut player = Scripted::parse("l, l, r, r, e", "Sra. Rodrigues");
    let outcome = Session::new(&scenario).run(&mut player).expect("scripted");
    assert_eq!(
        outcome.clues,
        vec![
            "Cabelo loiro",
            "Copo quebrado",
            "Pegada de sapato",
            "Pó branco",
            "Vidro com impressão",
        ]
    );
    let verdict = outcome.verdict.expect("named");
    assert_eq!(verdict.support(), ["Cabelo loiro", "Pó branco"]);
    assert!(verdict.sustained());
    assert!(player.transcript().contains(&Event::Judged(verdict)));
}

#[test]
fn classic_case_from_the_shipped_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/classic.json");
    let scenario = Scenario::load(&path).expect("shipped scenario loads");
    let mut player = Scripted::parse("r,l,E,", "Dr. Ramos");
    let outcome = Session::new(&scenario).run(&mut player).expect("scripted");
    assert_eq!(
        outcome.clues,
        vec!["Carta rasgada", "Luvas sujas", "Pegada de sapato"]
    );
    let verdict = outcome.verdict.expect("named");
    assert_eq!(verdict.matches(), 1);
    assert!(!verdict.sustained());
}

#[test]
fn random_walks_collect_exactly_what_they_visit() {
    let scenario = Scenario::classic();
    for seed in 0..64 {
        let mut player = Wanderer::seeded(seed).steps(8);
        let outcome = Session::new(&scenario).run(&mut player).expect("wanderer");
        assert!(outcome.clues.windows(2).all(|w| w[0] < w[1]));
        for clue in outcome.clues.iter() {
            assert!(scenario.suspects().contains(clue));
        }
        if let Ok(verdict) = outcome.verdict {
            assert!(verdict.matches() <= outcome.clues.len());
        }
    }
}
