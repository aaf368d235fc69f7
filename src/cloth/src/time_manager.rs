use std::time::{Duration, Instant};

const MIN_DT: f32 = 1e-6;

/// Fixed-timestep accumulator. Knows nothing about clocks: callers feed it the
/// elapsed time and run as many fixed steps as it hands back.
#[derive(Clone, Debug)]
pub struct FixedStep {
	dt: f32,
	max_steps: usize,
	acc: f32,
}

impl Default for FixedStep {
	fn default() -> Self {
		Self {
			dt: 1. / 60.,
			max_steps: 10,
			acc: 0.,
		}
	}
}

impl FixedStep {
	pub fn with_dt(mut self, dt: f32) -> Self {
		// NaN.max picks the bound
		self.dt = dt.max(MIN_DT);
		self
	}

	pub fn with_max_steps(mut self, max_steps: usize) -> Self {
		self.max_steps = max_steps.max(1);
		self
	}

	pub fn get_dt(&self) -> f32 {
		self.dt
	}

	pub fn get_max_steps(&self) -> usize {
		self.max_steps
	}

	pub fn pending(&self) -> f32 {
		self.acc
	}

	pub fn advance(&mut self, elapsed: f32) -> usize {
		if elapsed.is_finite() && elapsed > 0. {
			self.acc += elapsed;
		}
		let mut steps = 0;
		while self.acc >= self.dt && steps < self.max_steps {
			self.acc -= self.dt;
			steps += 1;
		}
		if self.acc >= self.dt {
			log::warn!(
				"dropping {:.3}s of simulation backlog after {} steps",
				self.acc,
				steps
			);
			self.acc %= self.dt;
		}
		steps
	}
}

/// Wall-clock sampler; time spent paused is not reported.
pub struct TimeManager {
	pause_start: Option<Instant>,
	start_time: Instant,
	total_pause: Duration,
}

impl Default for TimeManager {
	fn default() -> Self {
		Self {
			pause_start: None,
			start_time: Instant::now(),
			total_pause: Duration::ZERO,
		}
	}
}

impl TimeManager {
	pub fn is_running(&self) -> bool {
		self.pause_start.is_none()
	}

	pub fn set(&mut self, on: bool) {
		if on == self.is_running() {
			return;
		}
		match self.pause_start.take() {
			Some(pause_start) => self.total_pause += pause_start.elapsed(),
			None => self.pause_start = Some(Instant::now()),
		}
	}

	pub fn take_time(&mut self) -> f32 {
		let now = Instant::now();
		let mut passed = now.duration_since(self.start_time);
		if let Some(pause_start) = self.pause_start.as_mut() {
			// count the ongoing pause up to now, then restart it
			self.total_pause += now.duration_since(*pause_start);
			*pause_start = now;
		}
		self.start_time = now;
		passed = passed.saturating_sub(std::mem::take(&mut self.total_pause));
		passed.as_secs_f32()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_accumulates_partial_steps() {
		let mut fs = FixedStep::default().with_dt(0.01);
		assert_eq!(fs.advance(0.005), 0);
		assert_eq!(fs.advance(0.006), 1);
		assert!((fs.pending() - 0.001).abs() < 1e-6);
		assert_eq!(fs.advance(0.0251), 2);
	}

	#[test]
	fn test_caps_catch_up() {
		let mut fs = FixedStep::default().with_dt(0.01).with_max_steps(5);
		assert_eq!(fs.advance(3600.), 5);
		assert!(fs.pending() < fs.get_dt());
		assert_eq!(fs.advance(0.), 0);
	}

	#[test]
	fn test_degenerate_dt_is_clamped() {
		for dt in [0., -0.5, f32::NAN] {
			let mut fs = FixedStep::default().with_dt(dt);
			assert!(fs.get_dt() > 0.);
			assert_eq!(fs.advance(0.1), 10);
			assert_eq!(fs.advance(0.1), 10);
			assert!(fs.pending().is_finite());
		}
	}

	#[test]
	fn test_ignores_bad_elapsed() {
		let mut fs = FixedStep::default();
		assert_eq!(fs.advance(-1.), 0);
		assert_eq!(fs.advance(f32::NAN), 0);
		assert_eq!(fs.advance(f32::INFINITY), 0);
		assert_eq!(fs.pending(), 0.);
	}

	#[test]
	fn test_paused_time_not_reported() {
		let mut tm = TimeManager::default();
		tm.set(false);
		assert!(!tm.is_running());
		std::thread::sleep(Duration::from_millis(30));
		let t = tm.take_time();
		assert!(t < 0.02, "paused time leaked: {}", t);
		tm.set(true);
		std::thread::sleep(Duration::from_millis(10));
		assert!(tm.take_time() >= 0.009);
	}
}
