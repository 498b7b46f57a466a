#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::nmea_content::{GSV, SatInfo};

/// Reassembles the satellites-in-view list from a run of [`GSV`] sentences.
///
/// Entries are appended in the order sentences are added, never sorted, and
/// the accumulator does not reset itself when a new group starts. Call
/// [`clear`](GsvAccumulator::clear) to start over.
///
/// # Examples
///
/// ```rust
/// use nmea0183_dispatch::{GsvAccumulator, decode, nmea_content::Sentence};
///
/// let mut accumulator = GsvAccumulator::new();
///
/// for line in [
///     "$GPGSV,4,3,14,15,27,134,18,03,25,222,,22,51,057,16,09,07,036,*79",
///     "$GPGSV,4,4,14,07,01,181,,15,25,135,*76",
/// ] {
///     if let Ok(Some(Sentence::GSV(gsv))) = decode(line) {
///         accumulator.add(&gsv);
///     }
/// }
///
/// assert!(accumulator.is_complete());
/// assert_eq!(accumulator.satellites_in_view, 14);
/// assert_eq!(accumulator.satellites.len(), 6);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GsvAccumulator {
    /// Satellites in view, as reported by the last added sentence
    pub satellites_in_view: u8,
    /// Number of sentences in the group, as reported by the last added sentence
    pub total_messages: u8,
    last_message: u8,
    /// Every satellite entry added so far, in arrival order
    pub satellites: Vec<SatInfo>,
}

impl GsvAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the entries of one sentence.
    pub fn add(&mut self, gsv: &GSV) {
        self.satellites_in_view = gsv.satellites_in_view;
        self.total_messages = gsv.total_messages;
        self.last_message = gsv.message_number;
        self.satellites.extend_from_slice(&gsv.satellites);
    }

    /// Part index of the last added sentence, 0 before any.
    pub fn last_message(&self) -> u8 {
        self.last_message
    }

    /// Whether the last added sentence was the final part of its group.
    pub fn is_complete(&self) -> bool {
        self.total_messages > 0 && self.last_message == self.total_messages
    }

    /// Drops all entries and counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gsv(message_number: u8, satellites: &[SatInfo]) -> GSV {
        GSV {
            total_messages: 4,
            message_number,
            satellites_in_view: 14,
            satellites: satellites.iter().copied().collect(),
        }
    }

    fn parts() -> [GSV; 4] {
        [
            gsv(
                1,
                &[
                    SatInfo::new(25, 15, 175, 30),
                    SatInfo::new(14, 80, 41, 0),
                    SatInfo::new(19, 38, 259, 14),
                    SatInfo::new(1, 52, 233, 18),
                ],
            ),
            gsv(
                2,
                &[
                    SatInfo::new(18, 16, 79, 0),
                    SatInfo::new(11, 19, 312, 0),
                    SatInfo::new(14, 80, 41, 0),
                    SatInfo::new(21, 4, 135, 25),
                ],
            ),
            gsv(
                3,
                &[
                    SatInfo::new(15, 27, 134, 18),
                    SatInfo::new(3, 25, 222, 0),
                    SatInfo::new(22, 51, 57, 16),
                    SatInfo::new(9, 7, 36, 0),
                ],
            ),
            gsv(
                4,
                &[SatInfo::new(7, 1, 181, 0), SatInfo::new(15, 25, 135, 0)],
            ),
        ]
    }

    #[test]
    fn test_accumulates_in_call_order() {
        let parts = parts();
        let mut accumulator = GsvAccumulator::new();

        let order = [1, 0, 2, 0, 1, 2, 3];
        for &index in &order {
            accumulator.add(&parts[index]);
        }

        let expected: Vec<SatInfo> = order
            .iter()
            .flat_map(|&index| parts[index].satellites.iter().copied())
            .collect();

        assert_eq!(accumulator.satellites_in_view, 14);
        assert_eq!(accumulator.total_messages, 4);
        assert_eq!(accumulator.last_message(), 4);
        assert_eq!(accumulator.satellites.len(), 26);
        assert_eq!(accumulator.satellites, expected);
        assert!(accumulator.is_complete());
    }

    #[test]
    fn test_completion() {
        let parts = parts();
        let mut accumulator = GsvAccumulator::new();
        assert!(!accumulator.is_complete());
        assert_eq!(accumulator.last_message(), 0);

        for part in &parts[..3] {
            accumulator.add(part);
            assert!(!accumulator.is_complete());
        }

        accumulator.add(&parts[3]);
        assert!(accumulator.is_complete());
        assert_eq!(accumulator.satellites.len(), 14);

        accumulator.clear();
        assert_eq!(accumulator, GsvAccumulator::default());
    }
}
