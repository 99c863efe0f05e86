//! Simulation statistics collection and reporting.
//!
//! This module tracks activity of a simulated issue slot. It provides:
//! 1. **Occupancy:** Total ticks and ticks spent holding an operation.
//! 2. **Lifecycle:** Loads, clears, flush kills and branch kills.
//! 3. **Dispatch:** Whole-entry dispatches and fused-pair splits.
//! 4. **Wakeup:** Slow and fast bus matches, and bypass-suppressed ticks.

use std::time::Instant;

use serde::Serialize;

use crate::core::slot::transition::Issue;
use crate::core::slot::{Override, TickEvents};

/// Statistics gathered over a simulation run.
#[derive(Clone, Debug, Serialize)]
pub struct SlotStats {
    #[serde(skip)]
    start_time: Instant,
    /// Ticks simulated.
    pub ticks: u64,
    /// Ticks during which the slot held an operation.
    pub occupied_ticks: u64,
    /// Ticks during which the slot requested dispatch.
    pub request_ticks: u64,

    /// Records installed by the queue controller.
    pub loads: u64,
    /// Occupied entries removed by the queue controller.
    pub clears: u64,
    /// Occupied entries removed by a pipeline flush.
    pub kills: u64,
    /// Occupied entries invalidated by a branch misprediction.
    pub branch_kills: u64,

    /// Entries that dispatched whole and vacated the slot.
    pub dispatches_whole: u64,
    /// Fused pairs that dispatched one half and kept the other.
    pub dispatches_split: u64,

    /// Operand wakeups seen on the slow bus.
    pub slow_wakeups: u64,
    /// Operand wakeups seen on the fast bus.
    pub fast_wakeups: u64,
    /// Operand-ticks masked by a bypass pulse.
    pub bypass_suppressed: u64,
}

impl Default for SlotStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            ticks: 0,
            occupied_ticks: 0,
            request_ticks: 0,
            loads: 0,
            clears: 0,
            kills: 0,
            branch_kills: 0,
            dispatches_whole: 0,
            dispatches_split: 0,
            slow_wakeups: 0,
            fast_wakeups: 0,
            bypass_suppressed: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "lifecycle", "dispatch", "wakeup"];

impl SlotStats {
    /// Accounts one committed tick.
    pub fn record(&mut self, valid: bool, request: bool, ev: &TickEvents) {
        self.ticks += 1;
        self.occupied_ticks += u64::from(valid);
        self.request_ticks += u64::from(request);

        match ev.decided_by {
            Override::Load => self.loads += 1,
            Override::Clear if valid => self.clears += 1,
            Override::Kill if valid => self.kills += 1,
            _ => {}
        }
        // Counted only when the misprediction decided the outcome.
        self.branch_kills += u64::from(ev.branch_killed && ev.decided_by == Override::Computed);

        match ev.issue {
            Issue::Whole => self.dispatches_whole += 1,
            Issue::FirstHalf | Issue::SecondHalf => self.dispatches_split += 1,
            Issue::None => {}
        }

        self.slow_wakeups += ev.slow_hits.iter().filter(|&&hit| hit).count() as u64;
        self.fast_wakeups += u64::from(ev.fast_hit.is_some());
        self.bypass_suppressed += ev.suppressed.iter().filter(|&&s| s).count() as u64;
    }

    /// Fraction of ticks the slot was occupied.
    pub fn occupancy(&self) -> f64 {
        if self.ticks == 0 {
            0.0
        } else {
            self.occupied_ticks as f64 / self.ticks as f64
        }
    }

    /// Total operations (or halves) sent downstream.
    pub const fn dispatches(&self) -> u64 {
        self.dispatches_whole + self.dispatches_split
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an
    /// empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.ticks.max(1) as f64;

        if want("summary") {
            println!("\n==========================================================");
            println!("ISSUE SLOT SIMULATION STATISTICS");
            println!("==========================================================");
            println!("host_seconds             {seconds:.4} s");
            println!("sim_ticks                {}", self.ticks);
            println!("occupancy                {:.2}%", self.occupancy() * 100.0);
            println!(
                "request_rate             {:.2}%",
                self.request_ticks as f64 / cyc * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("lifecycle") {
            println!("LIFECYCLE");
            println!("  loads                  {}", self.loads);
            println!("  clears                 {}", self.clears);
            println!("  kills.flush            {}", self.kills);
            println!("  kills.branch           {}", self.branch_kills);
            println!("----------------------------------------------------------");
        }
        if want("dispatch") {
            println!("DISPATCH");
            println!("  dispatch.whole         {}", self.dispatches_whole);
            println!("  dispatch.split         {}", self.dispatches_split);
            println!("  dispatch.total         {}", self.dispatches());
            println!("----------------------------------------------------------");
        }
        if want("wakeup") {
            println!("WAKEUP");
            println!("  wakeup.slow            {}", self.slow_wakeups);
            println!("  wakeup.fast            {}", self.fast_wakeups);
            println!("  bypass.suppressed      {}", self.bypass_suppressed);
            println!("==========================================================");
        }
    }

    /// Prints all statistics sections.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
