//! Application state: feature states plus the bookkeeping the runtime needs.

use crate::config::Config;
use crate::ui::chart::{ChartIntent, ChartPhase, ChartReducer};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;
use crate::worldbank::{FetchError, YearBreakdown};

/// Generic MVI dispatch: take the current state, run the reducer, store the
/// result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    tick: u64,
    /// Counter feature state (MVI).
    counter: CounterState,
    /// Chart feature state (MVI).
    chart: ChartPhase,
    /// Highlighted year in the loaded chart.
    year_selection: usize,
    /// Generation of the most recently started fetch. Results tagged with an
    /// older generation are dropped.
    fetch_generation: u64,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            counter: CounterState::default(),
            chart: ChartPhase::default(),
            year_selection: 0,
            fetch_generation: 0,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    // -- counter --------------------------------------------------------

    pub fn counter(&self) -> CounterState {
        self.counter
    }

    /// View-level gate: a disabled counter swallows the key press before it
    /// becomes an intent. The reducer gates again for programmatic dispatch.
    pub fn press_increment(&mut self) {
        if self.counter.disabled {
            return;
        }
        self.dispatch_counter(CounterIntent::Increment);
    }

    pub fn press_clear(&mut self) {
        self.dispatch_counter(CounterIntent::Reset);
    }

    pub fn press_toggle(&mut self) {
        self.dispatch_counter(CounterIntent::ToggleDisabled);
    }

    fn dispatch_counter(&mut self, intent: CounterIntent) {
        dispatch_mvi!(self, counter, CounterReducer, intent);
    }

    // -- chart ----------------------------------------------------------

    pub fn chart(&self) -> &ChartPhase {
        &self.chart
    }

    pub fn year_selection(&self) -> usize {
        self.year_selection
    }

    /// Begin a new fetch cycle: bump the generation and enter loading.
    /// Returns the generation the spawned task must tag its result with.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.dispatch_chart(ChartIntent::FetchStarted);
        self.fetch_generation
    }

    /// Apply a fetch outcome. Results from superseded fetches are ignored.
    pub fn on_population(
        &mut self,
        generation: u64,
        outcome: Result<Vec<YearBreakdown>, FetchError>,
    ) {
        if generation != self.fetch_generation {
            tracing::debug!(
                generation,
                current = self.fetch_generation,
                "ignoring stale fetch result"
            );
            return;
        }
        match outcome {
            Ok(points) => {
                // Land on the most recent year.
                self.year_selection = points.len().saturating_sub(1);
                self.dispatch_chart(ChartIntent::FetchSucceeded { points });
            }
            Err(err) => self.dispatch_chart(ChartIntent::FetchFailed {
                message: err.user_message(),
            }),
        }
    }

    /// Move the year highlight left or right, wrapping at the ends.
    pub fn move_year_selection(&mut self, direction: i32) {
        let len = self.chart.points().len();
        if len == 0 {
            self.year_selection = 0;
            return;
        }
        let current = self.year_selection.min(len - 1);
        self.year_selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    fn dispatch_chart(&mut self, intent: ChartIntent) {
        dispatch_mvi!(self, chart, ChartReducer, intent);
    }
}
