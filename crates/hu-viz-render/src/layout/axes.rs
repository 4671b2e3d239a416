/// Linear axis with tick generation and data→pixel mapping.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
}

impl Axis {
    /// Axis spanning exactly `[min, max]`, with "nice number" ticks inside it.
    ///
    /// Non-finite or empty ranges fall back to `[0, 1]`; a zero-width range
    /// is widened by one unit on each side.
    pub fn within(min: f64, max: f64, target_ticks: usize) -> Self {
        let (min, max) = sanitize_range(min, max);
        let step = nice_step((max - min) / (target_ticks.max(2) - 1) as f64);

        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        let first = (min / step - 1e-9).ceil() as i64;
        let last = (max / step + 1e-9).floor() as i64;
        for k in first..=last {
            let v = k as f64 * step;
            ticks.push(v);
            labels.push(format_tick(v, step));
        }

        Self { min, max, label: String::new(), tick_positions: ticks, tick_labels: labels }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value to pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = (value - self.min) / (self.max - self.min);
        px_min + frac * (px_max - px_min)
    }
}

fn sanitize_range(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let (min, max) = if min > max { (max, min) } else { (min, max) };
    if (max - min).abs() < 1e-15 { (min - 1.0, max + 1.0) } else { (min, max) }
}

/// "Nice numbers": round a raw step to 1, 2 or 5 times a power of ten.
fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    // Avoid "-0"
    let v = if value.abs() < step * 0.01 { 0.0 } else { value };
    format!("{v:.decimals$}")
}
