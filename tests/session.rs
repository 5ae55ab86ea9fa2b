use phasekeeper::gameplay::*;
use phasekeeper::records::*;

fn catalog() -> Catalog {
    r#"["A", "B", "C"]"#.parse().unwrap()
}

#[test]
fn full_session_exports_what_was_saved() {
    let mut game = Game::new(catalog(), Rules::default());
    game.add_player("Al");
    game.select_phases(vec!["A".into(), "B".into(), "C".into()]);
    game.record_round("Al", 10, true);
    game.save_snapshot();
    game.record_round("Al", 5, true);
    game.save_snapshot();
    game.record_round("Al", 0, true);
    game.record_round("Al", 0, true);
    game.save_snapshot();
    game.remove_player("Al");
    game.save_snapshot();

    let rows = game.export_history();
    let csv = Export::from(&rows).render(Format::Csv).unwrap();
    assert_eq!(
        csv,
        "snapshot,player,score,phase\n\
         1,Al,10,B\n\
         2,Al,15,C\n\
         3,Al,15,Completed\n"
    );
    assert!(game.seat("Al").is_none());
    assert_eq!(game.history().len(), 4);
    assert!(game.history()[3].seats().is_empty());
}

#[test]
fn sessions_are_independent() {
    let mut one = Game::new(catalog(), Rules::default());
    let mut two = Game::new(
        catalog(),
        Rules {
            sign: Sign::Subtract,
            default_phases: Some(1),
        },
    );
    one.add_player("Al");
    two.add_player("Al");
    one.record_round("Al", 10, true);
    two.record_round("Al", 10, true);
    assert_eq!(one.score("Al"), Some(10));
    assert_eq!(two.score("Al"), Some(-10));
    assert_eq!(one.phase_label("Al"), Some("B"));
    assert_eq!(two.phase_label("Al"), Some(phasekeeper::core::COMPLETED));
}
