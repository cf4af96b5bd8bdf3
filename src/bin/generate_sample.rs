//! Generates a deterministic synthetic asylum-statistics CSV with the
//! headers the dashboard expects. Handy for development and demos:
//!
//! ```text
//! cargo run --bin generate_sample
//! ```

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

    /// Uniform integer in [0, max).
    fn below(&mut self, max: u64) -> u64 {
        (self.next_f64() * max as f64) as u64
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let years = ["2014", "2015", "2016", "2017", "2018", "2019", "2020"];
    let countries = [
        ("Kenya", 3200),
        ("Uganda", 2800),
        ("Germany", 9500),
        ("France", 7400),
        ("Canada", 4100),
        ("South Africa", 5200),
    ];
    let origins = ["Somalia", "Syrian Arab Rep.", "Afghanistan", "Eritrea", "Dem. Rep. of the Congo"];
    let procedures = ["G / FI", "G / AR", "U / FI"];

    let output_path = "asylum_seekers_sample.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Year",
            "Country / territory of asylum/residence",
            "Origin",
            "RSD procedure type / level",
            "Applied during year",
            "Total decisions",
            "decisions_recognized",
            "Rejected",
            "Otherwise closed",
            "Total pending start-year",
            "Total pending end-year",
        ])
        .expect("Failed to write header");

    let mut rows: u64 = 0;
    for year in &years {
        for (country, base) in &countries {
            for origin in &origins {
                for procedure in &procedures {
                    let applied = rng.below(*base as u64);
                    let decisions = rng.below(applied + 1);
                    let recognized = rng.below(decisions + 1);
                    let rejected = rng.below(decisions - recognized + 1);
                    let otherwise_closed = decisions - recognized - rejected;
                    let pending_start = rng.below(*base as u64 / 2);
                    let pending_end = (pending_start + applied).saturating_sub(decisions);

                    writer
                        .write_record([
                            year.to_string(),
                            country.to_string(),
                            origin.to_string(),
                            procedure.to_string(),
                            applied.to_string(),
                            decisions.to_string(),
                            recognized.to_string(),
                            rejected.to_string(),
                            otherwise_closed.to_string(),
                            pending_start.to_string(),
                            pending_end.to_string(),
                        ])
                        .expect("Failed to write row");
                    rows += 1;
                }
            }
        }
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} records to {output_path}");
}
