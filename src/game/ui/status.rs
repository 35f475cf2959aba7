//! Status line shown under the playfield.

use std::fmt;

use crate::game::state::GameMode;

/// Which hint to show. A win always takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Ready with umbrellas left
    AimPrompt,
    /// Nothing left to launch and boxes still standing
    OutOfUmbrellas,
    Won,
    /// Mid-aim or mid-flight
    Hidden,
}

impl StatusMessage {
    pub fn evaluate(mode: GameMode, remaining: u32, won: bool) -> Self {
        if won {
            StatusMessage::Won
        } else if remaining == 0 {
            StatusMessage::OutOfUmbrellas
        } else if mode == GameMode::Ready {
            StatusMessage::AimPrompt
        } else {
            StatusMessage::Hidden
        }
    }

    pub fn text(self) -> Option<&'static str> {
        match self {
            StatusMessage::AimPrompt => {
                Some("🎯 Drag the umbrella ☂️ to aim and release to launch!")
            }
            StatusMessage::OutOfUmbrellas => {
                Some("🔄 No umbrellas left! Click Reset to play again.")
            }
            StatusMessage::Won => {
                Some("🎉 You WIN! All boxes destroyed! Click Reset to play again.")
            }
            StatusMessage::Hidden => None,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_beats_everything() {
        assert_eq!(StatusMessage::evaluate(GameMode::Flying, 0, true), StatusMessage::Won);
    }

    #[test]
    fn test_out_of_umbrellas_even_mid_flight() {
        assert_eq!(
            StatusMessage::evaluate(GameMode::Flying, 0, false),
            StatusMessage::OutOfUmbrellas
        );
    }

    #[test]
    fn test_prompt_and_hidden() {
        assert_eq!(StatusMessage::evaluate(GameMode::Ready, 3, false), StatusMessage::AimPrompt);
        assert_eq!(StatusMessage::evaluate(GameMode::Aiming, 3, false), StatusMessage::Hidden);
        assert_eq!(StatusMessage::Hidden.to_string(), "");
    }
}
