//! Win descriptors: how (and whether) a round ended.

use crate::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// How a round ended, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The round is still being played.
    Undecided,
    /// Every square filled with no winner.
    Tie,
    /// The marked player completed a line.
    Won(Mark),
}

/// The outcome of a round plus the winning line, as reported by the server.
///
/// The mask packs the winning line into nine bits: bit `i` is set when
/// square `i` is part of the line. It carries meaning only for a [`Outcome::Won`]
/// round; ties never highlight anything.
///
/// Wire form is the pair `[outcome, mask]` where the outcome slot is
/// `null`, `"TIE"`, or a mark string, and the mask slot is `null` or an
/// integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWin", into = "RawWin")]
pub struct WinDescriptor {
    outcome: Outcome,
    mask: u16,
}

impl WinDescriptor {
    /// Descriptor for a round still in progress.
    pub fn none() -> Self {
        Self {
            outcome: Outcome::Undecided,
            mask: 0,
        }
    }

    /// Descriptor for a win on the line described by `mask`.
    pub fn won(mark: Mark, mask: u16) -> Self {
        Self {
            outcome: Outcome::Won(mark),
            mask,
        }
    }

    /// Descriptor for a tied round.
    pub fn tie() -> Self {
        Self {
            outcome: Outcome::Tie,
            mask: 0,
        }
    }

    /// The round's outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the round has ended in a win or a tie.
    pub fn is_decided(&self) -> bool {
        self.outcome != Outcome::Undecided
    }

    /// The winning-line mask. Zero unless the outcome is a win.
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Whether the square at `index` is part of the winning line.
    ///
    /// Always false for undecided and tied rounds.
    pub fn highlights(&self, index: usize) -> bool {
        matches!(self.outcome, Outcome::Won(_)) && index < 9 && self.mask & (1 << index) != 0
    }
}

impl Default for WinDescriptor {
    fn default() -> Self {
        Self::none()
    }
}

/// A rejected wire-format win pair.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WinFormatError {
    /// The outcome slot held something other than `null`, `"TIE"`, or a mark.
    #[display("unrecognized win outcome {outcome:?}")]
    UnknownOutcome {
        /// What the slot held.
        outcome: String,
    },
    /// The mask names squares outside the nine-square board.
    #[display("win mask {mask:#b} has bits outside the board")]
    MaskOutOfRange {
        /// The offending mask.
        mask: u16,
    },
}

type RawWin = (Option<String>, Option<u16>);

impl TryFrom<RawWin> for WinDescriptor {
    type Error = WinFormatError;

    fn try_from((outcome, mask): RawWin) -> Result<Self, Self::Error> {
        let outcome = match outcome.as_deref() {
            None => Outcome::Undecided,
            Some("TIE") => Outcome::Tie,
            Some("X") => Outcome::Won(Mark::X),
            Some("O") => Outcome::Won(Mark::O),
            Some(other) => {
                return Err(WinFormatError::UnknownOutcome {
                    outcome: other.to_string(),
                });
            }
        };
        // The mask slot only describes winning lines. Ties and undecided
        // rounds may carry anything there; it is dropped.
        let mask = match outcome {
            Outcome::Won(_) => {
                let mask = mask.unwrap_or(0);
                if mask >= 1 << 9 {
                    return Err(WinFormatError::MaskOutOfRange { mask });
                }
                mask
            }
            _ => 0,
        };
        Ok(Self { outcome, mask })
    }
}

impl From<WinDescriptor> for RawWin {
    fn from(win: WinDescriptor) -> Self {
        match win.outcome {
            Outcome::Undecided => (None, None),
            Outcome::Tie => (Some("TIE".to_string()), None),
            Outcome::Won(mark) => (Some(mark.to_string()), Some(win.mask)),
        }
    }
}
