use image::{GrayImage, Luma};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Strata as (starting depth fraction, base intensity). Brighter pixels map
/// to a higher dielectric constant in the viewer.
const LAYERS: [(f64, f64); 4] = [(0.0, 30.0), (0.25, 90.0), (0.55, 150.0), (0.8, 210.0)];

fn layer_base(depth_frac: f64) -> f64 {
    let mut base = LAYERS[0].1;
    for &(start, intensity) in &LAYERS {
        if depth_frac >= start {
            base = intensity;
        }
    }
    base
}

fn main() {
    let mut args = std::env::args().skip(1);
    let output_path = args.next().unwrap_or_else(|| "subsurface.png".to_string());
    let width: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(240);
    let height: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(160);

    let mut rng = SimpleRng::new(42);
    let mut img = GrayImage::new(width, height);

    // Layered ground with undulating boundaries and grain noise.
    for y in 0..height {
        for x in 0..width {
            let wobble = (x as f64 / width as f64 * std::f64::consts::TAU * 2.0).sin() * 0.02;
            let depth_frac = y as f64 / height as f64 + wobble;
            let v = layer_base(depth_frac) + rng.gauss(0.0, 4.0);
            img.put_pixel(x, y, Luma([v.clamp(0.0, 255.0) as u8]));
        }
    }

    // Buried objects: two dense discs and one void,
    // as (center x frac, center y frac, radius frac, intensity).
    let objects: [(f64, f64, f64, f64); 3] = [
        (0.3, 0.45, 0.05, 255.0),
        (0.7, 0.65, 0.08, 240.0),
        (0.5, 0.85, 0.06, 10.0),
    ];
    for &(cx_frac, cy_frac, r_frac, intensity) in &objects {
        let cx = cx_frac * width as f64;
        let cy = cy_frac * height as f64;
        let radius = r_frac * width.min(height) as f64;
        for y in 0..height {
            for x in 0..width {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    img.put_pixel(x, y, Luma([intensity as u8]));
                }
            }
        }
    }

    img.save(&output_path).expect("Failed to write output image");

    println!("Wrote {width}×{height} subsurface map to {output_path}");
}
