use super::model::{
    Derivative1st, SpectralFrame, CATEGORY, CONTINUUM, HALFPEAKS, PEAKS, SPECTRUM2, TROUGH,
    TROUGH_FILTERED,
};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Deterministic demo data for the viewer
// ---------------------------------------------------------------------------

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// xoshiro256** seeded through an LCG, so a seed always gives the same spectrum.
struct NoiseRng {
    state: [u64; 4],
}

impl NoiseRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        NoiseRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// A planted band: centre (nm), width (nm), amplitude and the labels an
/// upstream detector would have attached to it.
struct Band {
    mu: f64,
    sigma: f64,
    amplitude: f64,
    peak: &'static str,
    halfpeak: &'static str,
}

const BANDS: [Band; 6] = [
    Band { mu: 320.0, sigma: 18.0, amplitude: 0.45, peak: "clearly_visible", halfpeak: "big" },
    Band { mu: 455.0, sigma: 10.0, amplitude: 0.30, peak: "visible", halfpeak: "big" },
    Band { mu: 560.0, sigma: 25.0, amplitude: 0.55, peak: "clearly_visible", halfpeak: "big" },
    Band { mu: 690.0, sigma: 6.0, amplitude: 0.12, peak: "small", halfpeak: "small" },
    Band { mu: 810.0, sigma: 14.0, amplitude: 0.20, peak: "visible", halfpeak: "small" },
    Band { mu: 955.0, sigma: 3.0, amplitude: 0.04, peak: "noise", halfpeak: "noise" },
];

const STEP_NM: f64 = 2.0;

/// Build a frame with every recognised column populated, plus the matching
/// first derivative.
///
/// Marker columns are placed at the planted band positions, so the result
/// looks like the output of the upstream finders without running any of them.
pub fn demo_frame(seed: u64) -> Result<(SpectralFrame, Derivative1st)> {
    let mut rng = NoiseRng::new(seed);

    // Wavelengths: 200 → 1100 nm, step 2
    let n = ((1100.0 - 200.0) / STEP_NM) as usize + 1;
    let wavelength: Vec<f64> = (0..n).map(|i| 200.0 + i as f64 * STEP_NM).collect();

    let continuum: Vec<f64> = wavelength.iter().map(|&w| 0.15 + 0.1 * (w - 200.0) / 900.0).collect();
    let spectrum: Vec<f64> = wavelength
        .iter()
        .zip(&continuum)
        .map(|(&w, &c)| {
            let signal: f64 = BANDS.iter().map(|b| gaussian(w, b.mu, b.sigma, b.amplitude)).sum();
            (c + signal + rng.gauss(0.0, 0.004)).clamp(0.0, 1.0)
        })
        .collect();
    let spectrum2: Vec<f64> = spectrum.iter().zip(&continuum).map(|(s, c)| s - c + 0.1).collect();

    let row_of = |nm: f64| (((nm - 200.0) / STEP_NM).round() as usize).min(n - 1);

    let mut peaks = vec![f64::NAN; n];
    let mut halfpeaks = vec![f64::NAN; n];
    let mut category: Vec<Option<&str>> = vec![None; n];
    for b in &BANDS {
        let top = row_of(b.mu);
        peaks[top] = spectrum[top];
        category[top] = Some(b.peak);

        // Half maximum sits at mu ± sigma * sqrt(2 ln 2); mark the rising flank.
        let half = row_of(b.mu - b.sigma * (2.0 * std::f64::consts::LN_2).sqrt());
        if half != top {
            halfpeaks[half] = spectrum[half];
            category[half] = Some(b.halfpeak);
        }
    }

    // Troughs: samples between neighbouring bands; keep the deeper half.
    let mut trough = vec![f64::NAN; n];
    let mut trough_filtered = vec![f64::NAN; n];
    for (i, pair) in BANDS.windows(2).enumerate() {
        let r = row_of((pair[0].mu + pair[1].mu) / 2.0);
        trough[r] = spectrum[r];
        if i % 2 == 0 {
            trough_filtered[r] = spectrum[r];
        }
    }

    let derivative = finite_difference(&wavelength, &spectrum);

    let frame = SpectralFrame::new(wavelength, spectrum)?
        .with_numeric(SPECTRUM2, spectrum2)?
        .with_numeric(CONTINUUM, continuum)?
        .with_numeric(PEAKS, peaks)?
        .with_numeric(HALFPEAKS, halfpeaks)?
        .with_category(CATEGORY, category)?
        .with_numeric(TROUGH, trough)?
        .with_numeric(TROUGH_FILTERED, trough_filtered)?;

    Ok((frame, derivative))
}

/// Difference quotient between consecutive samples at their midpoints,
/// scaled so the largest magnitude is 1.
fn finite_difference(x: &[f64], y: &[f64]) -> Derivative1st {
    let raw: Vec<[f64; 2]> = x
        .windows(2)
        .zip(y.windows(2))
        .map(|(xs, ys)| [(xs[0] + xs[1]) / 2.0, (ys[1] - ys[0]) / (xs[1] - xs[0])])
        .collect();
    let max = raw.iter().map(|p| p[1].abs()).fold(0.0_f64, f64::max);
    if max < f64::EPSILON {
        return Derivative1st::new(raw);
    }
    Derivative1st::new(raw.into_iter().map(|[m, d]| [m, d / max]).collect())
}
