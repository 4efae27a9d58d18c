use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const SITES: [(&str, usize); 4] = [
    ("CCAFS LC-40", 26),
    ("VAFB SLC-4E", 10),
    ("KSC LC-39A", 13),
    ("CCAFS SLC-40", 7),
];

/// Booster eras in flight order: (category, first flight, success rate, payload ceiling).
const BOOSTERS: [(&str, i64, f64, f64); 5] = [
    ("v1.0", 1, 0.2, 1000.0),
    ("v1.1", 6, 0.35, 5000.0),
    ("FT", 21, 0.75, 9600.0),
    ("B4", 40, 0.8, 7000.0),
    ("B5", 52, 0.95, 5500.0),
];

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
}

struct Launch {
    flight: i64,
    site: &'static str,
    class: i64,
    payload: f64,
    booster: String,
    category: &'static str,
}

fn booster_for(flight: i64) -> (&'static str, f64, f64) {
    BOOSTERS
        .iter()
        .rev()
        .find(|(_, first, _, _)| flight >= *first)
        .map(|&(cat, _, rate, ceiling)| (cat, rate, ceiling))
        .unwrap_or(("v1.0", 0.2, 1000.0))
}

fn generate(rng: &mut SimpleRng) -> Vec<Launch> {
    // Interleave sites so each appears across the whole flight range.
    let mut remaining: Vec<(&str, usize)> = SITES.to_vec();
    let total: usize = SITES.iter().map(|(_, n)| n).sum();
    let mut launches = Vec::with_capacity(total);

    for i in 0..total {
        let left: usize = remaining.iter().map(|(_, n)| n).sum();
        let mut pick = (rng.next_f64() * left as f64) as usize;
        let mut idx = 0;
        while pick >= remaining[idx].1 {
            pick -= remaining[idx].1;
            idx += 1;
        }
        remaining[idx].1 -= 1;
        let site = remaining[idx].0;

        let flight = i as i64 + 1;
        let (category, success_rate, ceiling) = booster_for(flight);
        let payload = (rng.next_f64() * ceiling).round();
        let class = i64::from(rng.next_f64() < success_rate);

        launches.push(Launch {
            flight,
            site,
            class,
            payload,
            booster: format!("F9 {category} B{:04}", 1000 + flight),
            category,
        });
    }
    launches
}

fn write_csv(path: &str, launches: &[Launch]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "",
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version",
            "Booster Version Category",
        ])
        .expect("Failed to write header");
    for (idx, l) in launches.iter().enumerate() {
        writer
            .write_record([
                idx.to_string(),
                l.flight.to_string(),
                l.site.to_string(),
                l.class.to_string(),
                l.payload.to_string(),
                l.booster.clone(),
                l.category.to_string(),
            ])
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV file");
}

fn write_parquet(path: &str, launches: &[Launch]) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.flight))),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.site))),
            Arc::new(Int64Array::from_iter_values(launches.iter().map(|l| l.class))),
            Arc::new(Float64Array::from_iter_values(launches.iter().map(|l| l.payload))),
            Arc::new(StringArray::from_iter_values(
                launches.iter().map(|l| l.booster.as_str()),
            )),
            Arc::new(StringArray::from_iter_values(launches.iter().map(|l| l.category))),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let launches = generate(&mut rng);

    let csv_path = "spacex_launch_dash.csv";
    let parquet_path = "spacex_launch_dash.parquet";
    write_csv(csv_path, &launches);
    write_parquet(parquet_path, &launches);

    let successes = launches.iter().filter(|l| l.class == 1).count();
    println!(
        "Wrote {} launches ({successes} successful, {} sites) to {csv_path} and {parquet_path}",
        launches.len(),
        SITES.len()
    );
}
