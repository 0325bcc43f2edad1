//! End-to-end pipeline tests against real WAV files on disk.

use std::f64::consts::PI;
use std::path::Path;

use wavscrub::audio_clean::pipeline::{denoise_file, DenoiseOptions};
use wavscrub::wav_io::read_waveform;

fn write_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

fn options(low: f64, high: f64, order: usize) -> DenoiseOptions {
    DenoiseOptions {
        low_hz: low,
        high_hz: high,
        order,
    }
}

#[test]
fn three_sample_mono_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_wav(&input, 8000, 1, &[0, 100, -100]);

    let result = denoise_file(&input, &output, &options(800.0, 1200.0, 2)).unwrap();
    assert_eq!(result.sample_rate, 8000);
    assert_eq!(result.samples, 3);

    let wave = read_waveform(&output).unwrap();
    assert_eq!(wave.sample_rate, 8000);
    assert_eq!(wave.channels, 1);
    assert_eq!(wave.samples.len(), 3);
}

#[test]
fn stereo_input_produces_one_output_sample_per_frame() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    // 100 stereo frames = 200 interleaved samples.
    let samples: Vec<i16> = (0..200).map(|n| (n % 32) as i16 * 100).collect();
    write_wav(&input, 8000, 2, &samples);

    let result = denoise_file(&input, &output, &options(800.0, 1200.0, 4)).unwrap();
    assert_eq!(result.samples, 100);

    let wave = read_waveform(&output).unwrap();
    assert_eq!(wave.samples.len(), 100);
}

#[test]
fn invalid_band_fails_without_writing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_wav(&input, 8000, 1, &[0, 100, -100]);

    let result = denoise_file(&input, &output, &options(1200.0, 800.0, 4));
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = denoise_file(
        &dir.path().join("missing.wav"),
        &dir.path().join("out.wav"),
        &DenoiseOptions::default(),
    );
    assert!(result.is_err());
}

fn sine_pcm(freq_hz: f64, sample_rate: u32, amplitude: f64, len: usize) -> Vec<i16> {
    (0..len)
        .map(|n| (amplitude * (2.0 * PI * freq_hz * n as f64 / sample_rate as f64).sin()) as i16)
        .collect()
}

fn tail_rms(samples: &[f64]) -> f64 {
    let tail = &samples[samples.len() / 2..];
    (tail.iter().map(|s| s * s).sum::<f64>() / tail.len() as f64).sqrt()
}

#[test]
fn in_band_tone_survives_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_wav(&input, 8000, 1, &sine_pcm(1000.0, 8000, 10000.0, 8000));

    denoise_file(&input, &output, &options(800.0, 1200.0, 4)).unwrap();

    let wave = read_waveform(&output).unwrap();
    let amplitude = tail_rms(&wave.samples) * 2.0_f64.sqrt();
    assert!(amplitude > 8500.0, "amplitude: {}", amplitude);
}

#[test]
fn out_of_band_tone_is_suppressed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    write_wav(&input, 8000, 1, &sine_pcm(3000.0, 8000, 10000.0, 8000));

    denoise_file(&input, &output, &options(800.0, 1200.0, 4)).unwrap();

    let wave = read_waveform(&output).unwrap();
    let amplitude = tail_rms(&wave.samples) * 2.0_f64.sqrt();
    assert!(amplitude < 200.0, "amplitude: {}", amplitude);
}
