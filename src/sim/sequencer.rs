//! Wave patterns, the spawn sequence plan, and pacing
//!
//! The plan opens with a hand-authored warm-up of seven waves, then a long
//! randomly generated run of the escalated pattern kinds. Pacing parameters
//! tighten multiplicatively on every wave, compounding into an exponential
//! difficulty ramp.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::rng::SpawnRng;

/// Bomb policy for a single spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceBomb {
    /// Always a regular object
    Never,
    /// Always a bomb
    Always,
    /// Bomb with 1-in-7 probability
    Random,
}

/// One wave pattern: how many objects a sequencer step launches and whether
/// it trails deferred sub-spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveKind {
    OneNoBomb,
    One,
    TwoWithOneBomb,
    Two,
    Three,
    Four,
    Chain,
    FastChain,
}

impl WaveKind {
    /// Spawns fired immediately when the wave launches.
    pub fn launches(&self) -> &'static [ForceBomb] {
        use ForceBomb::*;
        match self {
            WaveKind::OneNoBomb => &[Never],
            WaveKind::One => &[Random],
            WaveKind::TwoWithOneBomb => &[Never, Always],
            WaveKind::Two => &[Random, Random],
            WaveKind::Three => &[Random, Random, Random],
            WaveKind::Four => &[Random, Random, Random, Random],
            // Chains launch a leader now and defer the rest
            WaveKind::Chain | WaveKind::FastChain => &[Random],
        }
    }

    /// Divisor applied to the chain delay for this wave's deferred spawns,
    /// or None when the wave has no deferred spawns.
    pub fn chain_divisor(&self) -> Option<f32> {
        match self {
            WaveKind::Chain => Some(CHAIN_DIVISOR),
            WaveKind::FastChain => Some(FAST_CHAIN_DIVISOR),
            _ => None,
        }
    }
}

/// Hand-authored opening waves: gentle, bomb-free start, then one guaranteed
/// bomb to teach the player, then a taste of volume and chains.
const PLAN_PREFIX: [WaveKind; 7] = [
    WaveKind::OneNoBomb,
    WaveKind::OneNoBomb,
    WaveKind::TwoWithOneBomb,
    WaveKind::TwoWithOneBomb,
    WaveKind::Three,
    WaveKind::One,
    WaveKind::Chain,
];

/// Kinds the random run draws from once the warm-up is over.
const ESCALATED_KINDS: [WaveKind; 4] = [
    WaveKind::Three,
    WaveKind::Four,
    WaveKind::Chain,
    WaveKind::FastChain,
];

/// The full ordered wave sequence, consumed front to back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencePlan {
    waves: Vec<WaveKind>,
    cursor: usize,
}

impl SequencePlan {
    /// Build the plan: authored prefix plus a long random escalated run.
    pub fn build(rng: &mut SpawnRng) -> Self {
        let mut waves = Vec::with_capacity(PLAN_PREFIX.len() + RANDOM_PLAN_LEN);
        waves.extend_from_slice(&PLAN_PREFIX);
        for _ in 0..RANDOM_PLAN_LEN {
            waves.push(*rng.pick(&ESCALATED_KINDS));
        }
        Self { waves, cursor: 0 }
    }

    /// Take the wave at the cursor and advance. None once exhausted.
    pub fn next(&mut self) -> Option<WaveKind> {
        let kind = self.waves.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(kind)
    }

    /// True once every planned wave has been consumed. Checked before
    /// scheduling: the game ends when the cursor reaches the plan length,
    /// never one wave later.
    pub fn exhausted(&self) -> bool {
        self.cursor >= self.waves.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_waves(waves: Vec<WaveKind>) -> Self {
        Self { waves, cursor: 0 }
    }
}

/// Pacing parameters, tightened every wave.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pacing {
    /// Delay before the next wave once the field is clear (seconds)
    pub popup_time: f32,
    /// Base delay between chain sub-spawns (seconds)
    pub chain_delay: f32,
    /// Global simulation speed multiplier
    pub speed: f32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            popup_time: INITIAL_POPUP_TIME,
            chain_delay: INITIAL_CHAIN_DELAY,
            speed: INITIAL_SPEED,
        }
    }
}

impl Pacing {
    /// Apply the per-wave decay: shorter waits, faster objects.
    pub fn decay(&mut self) {
        self.popup_time *= POPUP_TIME_DECAY;
        self.chain_delay *= CHAIN_DELAY_DECAY;
        self.speed *= SPEED_GROWTH;
    }

    /// Freeze the simulation (game over).
    pub fn halt(&mut self) {
        self.speed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_prefix_then_random_run() {
        let mut rng = SpawnRng::new(3);
        let plan = SequencePlan::build(&mut rng);
        assert_eq!(plan.len(), PLAN_PREFIX.len() + RANDOM_PLAN_LEN);
        assert_eq!(&plan.waves[..7], &PLAN_PREFIX);
        assert!(
            plan.waves[7..]
                .iter()
                .all(|kind| ESCALATED_KINDS.contains(kind))
        );
    }

    #[test]
    fn cursor_only_advances() {
        let mut plan = SequencePlan::from_waves(vec![WaveKind::One, WaveKind::Two]);
        assert_eq!(plan.next(), Some(WaveKind::One));
        assert_eq!(plan.cursor(), 1);
        assert_eq!(plan.next(), Some(WaveKind::Two));
        assert!(plan.exhausted());
        assert_eq!(plan.next(), None);
        assert_eq!(plan.cursor(), 2);
    }

    #[test]
    fn launch_counts_match_patterns() {
        assert_eq!(WaveKind::OneNoBomb.launches(), &[ForceBomb::Never]);
        assert_eq!(
            WaveKind::TwoWithOneBomb.launches(),
            &[ForceBomb::Never, ForceBomb::Always]
        );
        assert_eq!(WaveKind::Four.launches().len(), 4);
        // Chains launch exactly one leader up front
        assert_eq!(WaveKind::Chain.launches().len(), 1);
        assert_eq!(WaveKind::FastChain.launches().len(), 1);
    }

    #[test]
    fn fast_chain_is_tighter_than_chain() {
        let chain = WaveKind::Chain.chain_divisor().unwrap();
        let fast = WaveKind::FastChain.chain_divisor().unwrap();
        assert!(fast > chain);
        assert_eq!(WaveKind::Three.chain_divisor(), None);
    }

    #[test]
    fn pacing_decay_compounds() {
        let mut pacing = Pacing::default();
        for _ in 0..10 {
            pacing.decay();
        }
        let expected_popup = INITIAL_POPUP_TIME * POPUP_TIME_DECAY.powi(10);
        let expected_speed = INITIAL_SPEED * SPEED_GROWTH.powi(10);
        assert!((pacing.popup_time - expected_popup).abs() < 1e-5);
        assert!((pacing.speed - expected_speed).abs() < 1e-5);
        assert!(pacing.popup_time < INITIAL_POPUP_TIME);
        assert!(pacing.speed > INITIAL_SPEED);
    }
}
