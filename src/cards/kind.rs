//! Card variants and their fixed attributes.
//!
//! Each [`CardKind`] maps to one [`CardStyle`] record. Nothing about a
//! variant is looked up through a type hierarchy; `CardKind::style` is the
//! single source of the per-variant configuration.

use serde::{Deserialize, Serialize};

/// Fixed attributes of a card variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    /// Type tag.
    pub kind_name: &'static str,
    /// Canvas fill style.
    pub fill_style: &'static str,
    /// Whether move validation applies.
    pub movable: bool,
    /// Whether the card is drawn.
    pub visible: bool,
}

const VIRUS: CardStyle = CardStyle {
    kind_name: "virus",
    fill_style: "#f4f",
    movable: true,
    visible: false,
};

const LINK: CardStyle = CardStyle {
    kind_name: "link",
    fill_style: "#44f",
    movable: true,
    visible: false,
};

const ENEMY: CardStyle = CardStyle {
    kind_name: "enemy",
    fill_style: "#f44",
    movable: false,
    visible: true,
};

const EXIT: CardStyle = CardStyle {
    kind_name: "exit",
    fill_style: "#ff4",
    movable: false,
    visible: true,
};

const OWN_EXIT: CardStyle = CardStyle { kind_name: "own_exit", ..EXIT };
const ENEMY_EXIT: CardStyle = CardStyle { kind_name: "enemy_exit", ..EXIT };

/// Which player a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Own,
    Opponent,
}

/// Card variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Virus,
    Link,
    Enemy,
    /// Generic exit. Own and enemy exits share its style.
    Exit,
    OwnExit,
    EnemyExit,
}

impl CardKind {
    /// Every variant.
    pub const ALL: [CardKind; 6] = [
        CardKind::Virus,
        CardKind::Link,
        CardKind::Enemy,
        CardKind::Exit,
        CardKind::OwnExit,
        CardKind::EnemyExit,
    ];

    /// The fixed attributes of this variant.
    #[must_use]
    pub const fn style(self) -> &'static CardStyle {
        match self {
            CardKind::Virus => &VIRUS,
            CardKind::Link => &LINK,
            CardKind::Enemy => &ENEMY,
            CardKind::Exit => &EXIT,
            CardKind::OwnExit => &OWN_EXIT,
            CardKind::EnemyExit => &ENEMY_EXIT,
        }
    }

    /// Variant name, as used in placement hook keys.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            CardKind::Virus => "Virus",
            CardKind::Link => "Link",
            CardKind::Enemy => "Enemy",
            CardKind::Exit => "Exit",
            CardKind::OwnExit => "OwnExit",
            CardKind::EnemyExit => "EnemyExit",
        }
    }

    /// Single-character board glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            CardKind::Virus => 'V',
            CardKind::Link => 'L',
            CardKind::Enemy => 'E',
            CardKind::Exit => 'X',
            CardKind::OwnExit => 'O',
            CardKind::EnemyExit => 'N',
        }
    }

    /// The player this variant belongs to. The generic exit has no side.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            CardKind::Virus | CardKind::Link | CardKind::OwnExit => Some(Side::Own),
            CardKind::Enemy | CardKind::EnemyExit => Some(Side::Opponent),
            CardKind::Exit => None,
        }
    }

    /// Check if this is one of the exit variants.
    #[must_use]
    pub const fn is_exit(self) -> bool {
        matches!(self, CardKind::Exit | CardKind::OwnExit | CardKind::EnemyExit)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}
