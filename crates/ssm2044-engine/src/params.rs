use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use atomic_float::AtomicF64;

/// Saturation character of the input stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Character {
    Clean,
    #[default]
    Vintage,
    Aggressive,
}

impl Character {
    /// Maps a host-supplied index onto a variant, clamping out-of-range
    /// values to the nearest end of the list.
    #[inline]
    pub fn from_index(index: i64) -> Self {
        match index {
            i if i <= 0 => Character::Clean,
            1 => Character::Vintage,
            _ => Character::Aggressive,
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        match self {
            Character::Clean => 0,
            Character::Vintage => 1,
            Character::Aggressive => 2,
        }
    }

    /// Scale applied to the base input drive.
    #[inline]
    pub fn drive_scale(self) -> f64 {
        match self {
            Character::Clean => 0.5,
            Character::Vintage => 1.0,
            Character::Aggressive => 2.0,
        }
    }
}

/// Runtime configuration shared between a control thread and the audio
/// thread. Single writer, single reader, all accesses relaxed; the audio
/// thread reads every sample without taking a lock.
#[derive(Debug)]
pub struct SharedParams {
    character: AtomicU8,
    self_oscillation: AtomicBool,
    warmth: AtomicF64,
    resonance_compensation: AtomicBool,
}

impl Default for SharedParams {
    fn default() -> Self {
        Self {
            character: AtomicU8::new(Character::Vintage.index()),
            self_oscillation: AtomicBool::new(true),
            warmth: AtomicF64::new(0.5),
            resonance_compensation: AtomicBool::new(true),
        }
    }
}

impl SharedParams {
    #[inline]
    pub fn character(&self) -> Character {
        Character::from_index(self.character.load(Ordering::Relaxed) as i64)
    }

    pub fn set_character(&self, character: Character) {
        self.character.store(character.index(), Ordering::Relaxed);
    }

    #[inline]
    pub fn self_oscillation(&self) -> bool {
        self.self_oscillation.load(Ordering::Relaxed)
    }

    pub fn set_self_oscillation(&self, enabled: bool) {
        self.self_oscillation.store(enabled, Ordering::Relaxed);
    }

    #[inline]
    pub fn warmth(&self) -> f64 {
        self.warmth.load(Ordering::Relaxed)
    }

    /// Warmth scales the feedback saturation drive; stored clamped to [0, 1].
    pub fn set_warmth(&self, warmth: f64) {
        self.warmth.store(warmth.clamp(0.0, 1.0), Ordering::Relaxed);
    }

    #[inline]
    pub fn resonance_compensation(&self) -> bool {
        self.resonance_compensation.load(Ordering::Relaxed)
    }

    pub fn set_resonance_compensation(&self, enabled: bool) {
        self.resonance_compensation.store(enabled, Ordering::Relaxed);
    }
}
