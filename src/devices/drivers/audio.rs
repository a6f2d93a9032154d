//! Square-wave tones on the audio codec.

use log::debug;

use crate::hal::AudioPort;

pub const SAMPLE_RATE: u32 = 48_000;
/// Largest positive 24-bit sample.
pub const SAMPLE_MAX: i32 = 0x7F_FFFF;
/// Largest negative 24-bit sample.
pub const SAMPLE_MIN: i32 = -0x80_0000;

/// A tone: frequency and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    pub fn play<A: AudioPort>(self, port: &mut A) {
        play_tone(port, self.frequency_hz, self.duration_ms);
    }
}

/// Samples in one half period of `frequency_hz`, at least one.
pub fn half_period(frequency_hz: u32) -> u32 {
    (SAMPLE_RATE / frequency_hz.max(1).saturating_mul(2)).max(1)
}

/// Total samples for `duration_ms`.
pub fn sample_count(duration_ms: u32) -> u32 {
    (duration_ms as u64 * SAMPLE_RATE as u64 / 1000) as u32
}

/// Play a square wave on both channels. Returns once every sample has been
/// handed to the codec; a zero frequency plays silence for the duration.
pub fn play_tone<A: AudioPort>(port: &mut A, frequency_hz: u32, duration_ms: u32) {
    let total = sample_count(duration_ms);
    debug!("tone {} Hz for {} ms ({} samples)", frequency_hz, duration_ms, total);

    if frequency_hz == 0 {
        for _ in 0..total {
            port.write_sample(0, 0);
        }
        return;
    }

    let half = half_period(frequency_hz);
    let mut level = SAMPLE_MAX;
    let mut phase = 0;
    for _ in 0..total {
        port.write_sample(level, level);
        phase += 1;
        if phase == half {
            phase = 0;
            level = if level == SAMPLE_MAX { SAMPLE_MIN } else { SAMPLE_MAX };
        }
    }
}
