//! Default placements materialized during board preparation.

use smallvec::SmallVec;

use crate::board::BoardGrid;
use crate::core::Cell;
use crate::events::{EventRegistry, HandlerStatus};

use super::card::Card;
use super::kind::CardKind;

/// Cells a placement hook fills.
pub type PlacementCells = SmallVec<[Cell; 4]>;

/// Handler key of the placement hook for a kind.
#[must_use]
pub fn placement_key(kind: CardKind) -> String {
    format!("create_exits_{}", kind.type_name())
}

/// Install a `board.prepare` hook that places one `kind` card per cell.
///
/// The hook is keyed by kind, so a second call for the same kind replaces
/// the first call's cell list. On preparation each card is spawned, moved to
/// the cell's screen position, and written into the board at that cell.
/// Off-board cells are logged and skipped.
///
/// The hook is one-shot: it removes itself after its first preparation, so
/// preparing again does not spawn a second set of cards.
pub fn register_default_placement(
    kind: CardKind,
    cells: impl IntoIterator<Item = Cell>,
    registry: &mut EventRegistry,
) {
    let cells: PlacementCells = cells.into_iter().collect();
    tracing::debug!(%kind, cells = cells.len(), "registering default placement");

    registry.prepare_handlers_mut().set(
        placement_key(kind),
        Box::new(move |board: &mut dyn BoardGrid, events: &mut EventRegistry| {
            for &cell in &cells {
                if !board.config().contains(cell) {
                    tracing::warn!(%kind, %cell, "placement skipped: off the board");
                    continue;
                }

                let card = match Card::spawn(kind, board.config(), events) {
                    Ok(card) => card,
                    Err(err) => {
                        tracing::warn!(%kind, %err, "placement aborted");
                        break;
                    }
                };
                card.borrow_mut().base.position = Some(board.to_global(cell));

                match board.place(cell, card) {
                    Ok(_) => tracing::debug!(%kind, %cell, "placed"),
                    Err(err) => tracing::warn!(%kind, %err, "placement skipped"),
                }
            }
            HandlerStatus::Remove
        }),
    );
}

/// Register the standard exit layout: own exits on the first column, enemy
/// exits on the last, both on the middle rows.
pub fn register_default_exits(registry: &mut EventRegistry) {
    register_default_placement(CardKind::OwnExit, [Cell::new(0, 3), Cell::new(0, 4)], registry);
    register_default_placement(CardKind::EnemyExit, [Cell::new(7, 3), Cell::new(7, 4)], registry);
}
