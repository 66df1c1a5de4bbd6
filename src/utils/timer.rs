use std::time::Instant;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Timer {
    pub total_time: u128,
    pub runs: usize,
    pub curr: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self { total_time: 0, runs: 0, curr: Instant::now() }
    }
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.curr = Instant::now();
    }

    #[inline(always)]
    pub fn stop(&mut self) -> u128 {
        let diff = self.curr.elapsed().as_nanos();
        self.total_time += diff;
        self.runs += 1;
        diff
    }

    /// Runs `f` between a `start` and a `stop`.
    #[inline(always)]
    pub fn time<T, F: FnOnce() -> T>(&mut self, f: F) -> T {
        self.start();
        let out = f();
        self.stop();
        out
    }
}

/// Per-stage timings of one compression run.
#[derive(Clone, Debug, Default)]
pub struct CompressionStats {
    pub tabulate_time: Timer,
    pub build_time: Timer,
    pub extract_time: Timer,
    pub encode_time: Timer,
    pub encoded_bits: usize,
}

impl CompressionStats {
    pub fn render(&self) -> String {
        let mut out_stats = String::new();

        out_stats.push_str("################### Huffman compression stats ###################\n");
        out_stats.push_str(&format!("time tabulate {} ns\n", self.tabulate_time.total_time));
        out_stats.push_str(&format!("time build {} ns\n", self.build_time.total_time));
        out_stats.push_str(&format!("time extract {} ns\n", self.extract_time.total_time));
        out_stats.push_str(&format!("time encode {} ns ({} runs)\n", self.encode_time.total_time, self.encode_time.runs));
        out_stats.push_str(&format!("total encoded {} bits\n", self.encoded_bits));

        out_stats
    }
}

#[test]
fn test_timer() {
    use std::{thread, time};

    let mut timer = Timer::new();

    thread::sleep(time::Duration::from_millis(20));

    timer.stop();

    assert!(timer.total_time >= 20_000_000);
    assert_eq!(timer.runs, 1);
}

#[test]
fn test_time_closure() {
    let mut timer = Timer::new();

    let x = timer.time(|| 21 * 2);
    timer.time(|| ());

    assert_eq!(x, 42);
    assert_eq!(timer.runs, 2);
}

#[test]
fn test_stats_render() {
    let stats = CompressionStats { encoded_bits: 224, ..Default::default() };

    let rendered = stats.render();
    assert!(rendered.contains("total encoded 224 bits"));
    assert!(rendered.contains("time encode 0 ns (0 runs)"));
}
