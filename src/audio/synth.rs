//! Offline waveform synthesis for the game's wav assets
//!
//! Generates the four sound effects (plain sine bursts) and a short looping
//! background track per [`MusicStyle`] (additive synthesis with an ADSR
//! envelope). Run through the `make-sounds` binary; the outputs land under
//! `assets/sounds/` where [`SoundManager`](super::SoundManager) expects
//! them.

use super::{MusicStyle, SoundEvent};
use std::path::Path;

/// Output sample rate (44.1 kHz, mono, 16-bit)
pub const SAMPLE_RATE: u32 = 44_100;

/// Errors from asset generation
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("wav encoding error: {0}")]
    Wav(#[from] hound::Error),
}

/// Relative harmonic weights for the music voice
const HARMONICS: [f32; 6] = [1.0, 0.5, 0.3, 0.2, 0.15, 0.1];

/// Plain sine tone clipped to [-1, 1], used for the effect sounds
pub fn sine_tone(frequency: f32, duration: f32, volume: f32) -> Vec<f32> {
    let samples = (SAMPLE_RATE as f32 * duration) as usize;
    (0..samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (volume * (2.0 * std::f32::consts::PI * frequency * t).sin()).clamp(-1.0, 1.0)
        })
        .collect()
}

/// A single note with harmonics and a 10/20/50/20 ADSR envelope
pub fn note(frequency: f32, duration: f32, amplitude: f32) -> Vec<f32> {
    let len = (SAMPLE_RATE as f32 * duration) as usize;
    let mut wave = vec![0.0f32; len];

    for (i, sample) in wave.iter_mut().enumerate() {
        let t = i as f32 / SAMPLE_RATE as f32;
        for (h, weight) in HARMONICS.iter().enumerate() {
            let f = frequency * (h + 1) as f32;
            *sample += weight * (2.0 * std::f32::consts::PI * f * t).sin();
        }
    }

    let attack = len / 10;
    let decay = len / 5;
    let sustain = len / 2;
    let release = len - attack - decay - sustain;

    for (i, sample) in wave.iter_mut().enumerate() {
        let env = if i < attack {
            i as f32 / attack.max(1) as f32
        } else if i < attack + decay {
            1.0 - 0.3 * (i - attack) as f32 / decay.max(1) as f32
        } else if i < attack + decay + sustain {
            0.7
        } else {
            0.7 * (1.0 - (i - attack - decay - sustain) as f32 / release.max(1) as f32)
        };
        *sample *= env * amplitude;
    }

    wave
}

/// A chord: notes summed with amplitude split across them
pub fn chord(frequencies: &[f32], duration: f32, amplitude: f32) -> Vec<f32> {
    let len = (SAMPLE_RATE as f32 * duration) as usize;
    let mut wave = vec![0.0f32; len];
    for &f in frequencies {
        let voice = note(f, duration, amplitude / frequencies.len() as f32);
        for (sample, v) in wave.iter_mut().zip(voice) {
            *sample += v;
        }
    }
    wave
}

/// Convert a note name like "C4", "F#3" or "Bb4" to its frequency (A4 = 440 Hz)
pub fn note_to_freq(name: &str) -> f32 {
    let (pitch, octave) = name.split_at(name.len() - 1);
    let octave: i32 = octave.parse().unwrap_or(4);
    let semitones = match pitch {
        "C" => 0,
        "C#" | "Db" => 1,
        "D" => 2,
        "D#" | "Eb" => 3,
        "E" => 4,
        "F" => 5,
        "F#" | "Gb" => 6,
        "G" => 7,
        "G#" | "Ab" => 8,
        "A" => 9,
        "A#" | "Bb" => 10,
        "B" => 11,
        _ => 9,
    };
    440.0 * 2f32.powf((octave - 4) as f32 + (semitones - 9) as f32 / 12.0)
}

fn chord_freqs(names: &[&str]) -> Vec<f32> {
    names.iter().map(|n| note_to_freq(n)).collect()
}

/// Chord progression and seconds-per-chord for each music style
fn style_progression(style: MusicStyle) -> (Vec<Vec<&'static str>>, f32) {
    match style {
        MusicStyle::Peaceful => (
            vec![
                vec!["C4", "E4", "G4"],
                vec!["A3", "C4", "E4"],
                vec!["F3", "A3", "C4"],
                vec!["G3", "B3", "D4"],
            ],
            2.0,
        ),
        MusicStyle::Energetic => (
            vec![
                vec!["C4", "E4", "G4"],
                vec!["G3", "B3", "D4"],
                vec!["A3", "C4", "E4"],
                vec!["F3", "A3", "C4"],
            ],
            0.8,
        ),
        MusicStyle::Mysterious => (
            vec![
                vec!["A3", "C4", "Eb4"],
                vec!["F3", "Ab3", "C4"],
                vec!["D3", "F3", "A3"],
                vec!["E3", "G3", "B3"],
            ],
            2.5,
        ),
        MusicStyle::Meditative => (
            vec![
                vec!["D3", "A3", "D4"],
                vec!["G3", "D4", "G4"],
                vec!["A3", "E4", "A4"],
                vec!["D3", "A3", "D4"],
            ],
            3.0,
        ),
        MusicStyle::Epic => (
            vec![
                vec!["D3", "F3", "A3"],
                vec!["Bb3", "D4", "F4"],
                vec!["C4", "E4", "G4"],
                vec!["A3", "C#4", "E4"],
            ],
            1.5,
        ),
        MusicStyle::Jazz => (
            vec![
                vec!["D3", "F#3", "A3", "C4"],
                vec!["G3", "B3", "D4", "F4"],
                vec!["C4", "E4", "G4", "B4"],
                vec!["A3", "C4", "E4", "G4"],
            ],
            1.2,
        ),
    }
}

/// Render a looping background track for the given style
pub fn render_music(style: MusicStyle) -> Vec<f32> {
    let (progression, chord_secs) = style_progression(style);
    let mut track = Vec::new();
    for names in &progression {
        track.extend(chord(&chord_freqs(names), chord_secs, 0.3));
    }
    track
}

/// Write samples as a mono 16-bit wav
pub fn write_wav(path: &Path, samples: &[f32]) -> Result<(), SynthError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample((sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Generate the four effect wavs into `dir`
pub fn generate_effects(dir: &Path) -> Result<(), SynthError> {
    std::fs::create_dir_all(dir)?;
    let specs = [
        (SoundEvent::Place, 800.0, 0.10, 0.3),
        (SoundEvent::Win, 440.0, 0.50, 0.5),
        (SoundEvent::Invalid, 200.0, 0.20, 0.3),
        (SoundEvent::Undo, 600.0, 0.15, 0.3),
    ];
    for (event, freq, duration, volume) in specs {
        write_wav(&dir.join(event.file_name()), &sine_tone(freq, duration, volume))?;
    }
    Ok(())
}

/// Generate one background track per style into `dir`
pub fn generate_music(dir: &Path) -> Result<(), SynthError> {
    std::fs::create_dir_all(dir)?;
    for style in MusicStyle::ALL {
        write_wav(&dir.join(style.file_name()), &render_music(style))?;
    }
    Ok(())
}

/// Generate every wav asset the game uses
pub fn generate_all(dir: &Path) -> Result<(), SynthError> {
    generate_effects(dir)?;
    generate_music(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_to_freq_reference_pitch() {
        assert!((note_to_freq("A4") - 440.0).abs() < 0.01);
        assert!((note_to_freq("A3") - 220.0).abs() < 0.01);
        assert!((note_to_freq("C4") - 261.63).abs() < 0.1);
        assert!((note_to_freq("Bb4") - note_to_freq("A#4")).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sine_tone_length_and_range() {
        let samples = sine_tone(800.0, 0.1, 0.3);
        assert_eq!(samples.len(), (SAMPLE_RATE as f32 * 0.1) as usize);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(samples.iter().any(|&s| s.abs() > 0.1));
    }

    #[test]
    fn test_note_envelope_starts_and_ends_silent() {
        let samples = note(440.0, 0.5, 0.3);
        assert!(samples[0].abs() < 1e-3);
        assert!(samples[samples.len() - 1].abs() < 0.05);
    }

    #[test]
    fn test_chord_sums_voices() {
        let freqs = [note_to_freq("C4"), note_to_freq("E4"), note_to_freq("G4")];
        let samples = chord(&freqs, 0.2, 0.3);
        assert_eq!(samples.len(), (SAMPLE_RATE as f32 * 0.2) as usize);
        assert!(samples.iter().any(|&s| s.abs() > 0.01));
    }

    #[test]
    fn test_every_style_renders() {
        for style in MusicStyle::ALL {
            let track = render_music(style);
            assert!(!track.is_empty(), "style {:?} rendered nothing", style);
        }
    }
}
