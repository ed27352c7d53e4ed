//! Board setup and move integration tests.
//!
//! These tests run board preparation through the registry and drive cards
//! across the grid the way a turn controller does.

use std::rc::Rc;

use grid_cards::cards::{placement_key, register_default_exits, register_default_placement};
use grid_cards::{
    draw_pass, Board, BoardConfig, BoardGrid, Camera, Card, CardKind, Cell, CommandBuffer,
    DrawCommand, Entity, EventRegistry, MoveError, MoveOutcome, Vec2,
};

/// Test the fixed attributes of a fresh virus.
#[test]
fn test_virus_scenario() {
    let mut registry = EventRegistry::new();
    let virus = Card::spawn(CardKind::Virus, &BoardConfig::default(), &mut registry).unwrap();
    let v = virus.borrow();

    assert!(v.movable);
    assert!(!v.base.visible);
    assert_eq!(v.fill_style, "#f4f");
}

/// Test exit placement on an empty board: exactly the listed cells fill.
#[test]
fn test_exit_placement_scenario() {
    let mut registry = EventRegistry::new();
    register_default_placement(
        CardKind::OwnExit,
        [Cell::new(0, 0), Cell::new(7, 7)],
        &mut registry,
    );

    let mut board = Board::default();
    board.prepare(&mut registry);

    for x in 0..8 {
        for y in 0..8 {
            let cell = Cell::new(x, y);
            let placed = board.get(cell);
            if cell == Cell::new(0, 0) || cell == Cell::new(7, 7) {
                let card = placed.expect("exit placed").borrow();
                assert_eq!(card.kind(), CardKind::OwnExit);
                assert!(card.base.visible);
                assert!(!card.movable);
            } else {
                assert!(placed.is_none(), "{cell} should be empty");
            }
        }
    }
}

/// Test that placed exits sit at their cell's screen position.
#[test]
fn test_exit_positions_follow_camera() {
    let mut registry = EventRegistry::new();
    register_default_placement(CardKind::EnemyExit, [Cell::new(7, 3)], &mut registry);

    let mut board = Board::new(BoardConfig::default(), Camera::new(25.0));
    board.prepare(&mut registry);

    let exit = board.get(Cell::new(7, 3)).unwrap().borrow();
    assert_eq!(exit.base.position, Some(Vec2::new(725.0, 325.0)));
}

/// Test that own and enemy exits coexist under separate keys.
#[test]
fn test_default_exit_layout() {
    let mut registry = EventRegistry::new();
    register_default_exits(&mut registry);

    assert!(registry.prepare_handlers().contains(&placement_key(CardKind::OwnExit)));
    assert!(registry.prepare_handlers().contains(&placement_key(CardKind::EnemyExit)));

    let mut board = Board::default();
    board.prepare(&mut registry);

    let expected = "........\n\
                    ........\n\
                    ........\n\
                    O......N\n\
                    O......N\n\
                    ........\n\
                    ........\n\
                    ........\n";
    assert_eq!(board.to_string(), expected);
}

/// Test a virus walking across the board, one step at a time.
#[test]
fn test_walk_and_capture() {
    let config = BoardConfig::default();
    let mut registry = EventRegistry::new();
    let mut board = Board::new(config.clone(), Camera::default());

    let virus = Card::spawn(CardKind::Virus, &config, &mut registry).unwrap();
    board.place(Cell::new(1, 3), Rc::clone(&virus)).unwrap();
    let enemy = Card::spawn(CardKind::Enemy, &config, &mut registry).unwrap();
    board.place(Cell::new(3, 3), Rc::clone(&enemy)).unwrap();

    // Two cells at once is refused
    assert!(matches!(
        board.move_card(Cell::new(1, 3), Cell::new(3, 3)),
        Err(MoveError::TooFar { distance: 2, .. })
    ));

    assert!(matches!(board.move_card(Cell::new(1, 3), Cell::new(2, 3)), Ok(MoveOutcome::Moved)));
    let outcome = board.move_card(Cell::new(2, 3), Cell::new(3, 3)).unwrap();

    assert!(Rc::ptr_eq(outcome.captured().unwrap(), &enemy));
    assert!(Rc::ptr_eq(board.get(Cell::new(3, 3)).unwrap(), &virus));
    assert_eq!(board.len(), 1);
    assert_eq!(virus.borrow().base.position, Some(board.to_global(Cell::new(3, 3))));
}

/// Test a link running for the enemy exits past its own pieces.
#[test]
fn test_link_connects_through_enemy_exit() {
    let config = BoardConfig::default();
    let mut registry = EventRegistry::new();
    register_default_exits(&mut registry);

    let mut board = Board::new(config.clone(), Camera::default());
    board.prepare(&mut registry);

    let link = Card::spawn(CardKind::Link, &config, &mut registry).unwrap();
    board.place(Cell::new(6, 3), Rc::clone(&link)).unwrap();
    let virus = Card::spawn(CardKind::Virus, &config, &mut registry).unwrap();
    board.place(Cell::new(6, 4), Rc::clone(&virus)).unwrap();

    // Own pieces block
    assert_eq!(
        board.move_card(Cell::new(6, 3), Cell::new(6, 4)).unwrap_err(),
        MoveError::OwnPiece(Cell::new(6, 4))
    );

    let outcome = board.move_card(Cell::new(6, 3), Cell::new(7, 3)).unwrap();
    assert!(matches!(&outcome, MoveOutcome::Connected(card) if Rc::ptr_eq(card, &link)));

    // The exit stays in place
    assert_eq!(board.get(Cell::new(7, 3)).unwrap().borrow().kind(), CardKind::EnemyExit);
    assert!(board.get(Cell::new(6, 3)).is_none());
    assert_eq!(board.len(), 5);

    // A virus walking into its own exit is refused
    let home = Card::spawn(CardKind::Virus, &config, &mut registry).unwrap();
    board.place(Cell::new(1, 3), home).unwrap();
    assert_eq!(
        board.move_card(Cell::new(1, 3), Cell::new(0, 3)).unwrap_err(),
        MoveError::OwnPiece(Cell::new(0, 3))
    );
}

/// Test that preparing twice does not duplicate the exits.
#[test]
fn test_second_prepare_is_idempotent() {
    let mut registry = EventRegistry::new();
    register_default_exits(&mut registry);

    let mut board = Board::default();
    board.prepare(&mut registry);
    let first = board.to_string();

    board.prepare(&mut registry);
    assert_eq!(board.to_string(), first);
    assert_eq!(board.len(), 4);
    assert_eq!(registry.click_handlers().len(), 4);
    assert!(!registry.prepare_handlers().contains(&placement_key(CardKind::OwnExit)));
}

/// Test that captured cards stop costing a click handler once dropped.
#[test]
fn test_captured_card_handler_pruned() {
    let config = BoardConfig::default();
    let mut registry = EventRegistry::new();
    let mut board = Board::new(config.clone(), Camera::default());

    let virus = Card::spawn(CardKind::Virus, &config, &mut registry).unwrap();
    board.place(Cell::new(2, 2), virus).unwrap();
    let enemy = Card::spawn(CardKind::Enemy, &config, &mut registry).unwrap();
    board.place(Cell::new(2, 3), enemy).unwrap();
    assert_eq!(registry.click_handlers().len(), 2);

    let outcome = board.move_card(Cell::new(2, 2), Cell::new(2, 3)).unwrap();
    drop(outcome);

    registry.dispatch_click(&grid_cards::ClickEvent::at(0.0, 0.0));
    assert_eq!(registry.click_handlers().len(), 1);
}

/// Test the selection flow a controller uses before committing a move.
#[test]
fn test_select_then_validate() {
    let config = BoardConfig::default();
    let camera = Camera::new(0.0);
    let mut registry = EventRegistry::new();
    let link = Card::spawn(CardKind::Link, &config, &mut registry).unwrap();

    let mut l = link.borrow_mut();
    assert_eq!(l.check_move(Cell::new(3, 3)), Err(MoveError::NoSelection));

    // Pick up from a click position
    let cell = config.cell_at(Vec2::new(340.0, 360.0), &camera);
    l.select_to_move(cell);

    assert!(l.valid_move(Cell::new(3, 4)));
    assert!(!l.valid_move(Cell::new(4, 4)));
    assert!(l.valid_move(Cell::new(2, 3)));

    // Snap the card onto the target cell
    l.base.position = Some(Card::board_cell_from_screen(Vec2::new(250.0, 390.0), &camera, &config));
    assert_eq!(l.base.position, Some(Vec2::new(200.0, 300.0)));
}

/// Test drawing the prepared board: only visible cards render.
#[test]
fn test_draw_prepared_board() {
    let config = BoardConfig::default();
    let mut registry = EventRegistry::new();
    register_default_exits(&mut registry);

    let mut board = Board::new(config.clone(), Camera::default());
    board.prepare(&mut registry);
    let virus = Card::spawn(CardKind::Virus, &config, &mut registry).unwrap();
    board.place(Cell::new(4, 4), virus).unwrap();

    let cards: Vec<_> = board.occupied().map(|(_, card)| card.borrow()).collect();
    let entities: Vec<&dyn Entity> = cards.iter().map(|c| &**c as &dyn Entity).collect();

    let mut buffer = CommandBuffer::new();
    draw_pass(&entities, &mut buffer);

    let rects = buffer
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::FillRect { .. }))
        .count();
    assert_eq!(rects, 4);
    assert!(buffer
        .commands()
        .iter()
        .all(|c| !matches!(c, DrawCommand::SetFillStyle(s) if s == "#f4f")));
}
