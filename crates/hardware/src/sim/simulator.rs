//! Simulator: owns a slot together with its statistics and cycle counter.
//!
//! The driver stands in for the environment around a single slot. Each step
//! takes the tick's inputs and bus snapshot, evaluates and commits the slot,
//! and accounts statistics. The first contract violation halts it for good.

use serde::Serialize;
use tracing::{debug, error};

use super::stimulus::Stimulus;
use crate::common::error::{ConfigError, SimError};
use crate::config::Config;
use crate::core::slot::io::{SlotInputs, SlotOutputs};
use crate::core::slot::IssueSlot;
use crate::core::wakeup::WakeupBus;
use crate::stats::SlotStats;

/// Outputs of one simulated tick, tagged with its cycle number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TickRecord {
    /// Cycle the outputs were produced in.
    pub cycle: u64,
    /// Slot outputs for that cycle.
    pub outputs: SlotOutputs,
}

/// Top-level simulator for one issue slot.
#[derive(Debug)]
pub struct SlotSimulator {
    /// Simulated slot.
    pub slot: IssueSlot,
    /// Statistics collected so far.
    pub stats: SlotStats,
    cycle: u64,
    halted: bool,
    trace_ticks: bool,
}

impl SlotSimulator {
    /// Creates a simulator with an empty slot.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            slot: IssueSlot::new(config.slot.clone()),
            stats: SlotStats::default(),
            cycle: 0,
            halted: false,
            trace_ticks: config.general.tracing_enabled(),
        })
    }

    /// Number of ticks committed so far.
    #[inline]
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Whether a contract violation stopped the simulator.
    #[inline]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Advances the slot by one tick.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Contract`] for the tick that violated the slot
    /// contract and [`SimError::Halted`] for every step after it.
    pub fn step(&mut self, io: &SlotInputs, bus: &WakeupBus) -> Result<SlotOutputs, SimError> {
        if self.halted {
            return Err(SimError::Halted(self.cycle));
        }

        let (outputs, events) = match self.slot.advance(io, bus) {
            Ok(result) => result,
            Err(source) => {
                error!(cycle = self.cycle, %source, "slot contract violated, halting");
                self.halted = true;
                return Err(SimError::Contract {
                    cycle: self.cycle,
                    source,
                });
            }
        };

        self.stats.record(outputs.valid, outputs.request, &events);
        if self.trace_ticks {
            debug!(
                cycle = self.cycle,
                state = ?outputs.debug.state,
                p1 = outputs.debug.p1,
                p2 = outputs.debug.p2,
                request = outputs.request,
                dispatch = outputs.dispatch.is_some(),
                next = ?outputs.projection.state,
                "tick"
            );
        }
        self.cycle += 1;
        Ok(outputs)
    }

    /// Runs every tick of `stimulus`, returning the outputs of each.
    ///
    /// Ticks whose bus leaves the slow lanes empty are treated as idle buses
    /// of the configured width.
    ///
    /// # Errors
    ///
    /// Stops at the first failing tick and returns its error.
    pub fn run(&mut self, stimulus: &Stimulus) -> Result<Vec<TickRecord>, SimError> {
        let lanes = self.slot.config().slow_wakeup_lanes;
        let mut records = Vec::with_capacity(stimulus.ticks.len());
        for tick in &stimulus.ticks {
            let bus = tick.bus_or_idle(lanes);
            let cycle = self.cycle;
            let outputs = self.step(&tick.inputs, &bus)?;
            records.push(TickRecord { cycle, outputs });
        }
        Ok(records)
    }
}
