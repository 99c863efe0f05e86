//! Issue slot: one scheduling entry of an out-of-order issue queue.
//!
//! A slot holds at most one (possibly fused) operation and, each tick:
//! 1. **Requests** dispatch when its operands are ready.
//! 2. **Snoops** the slow and fast wakeup buses to track operand readiness.
//! 3. **Resolves** kill, load, clear and grant into a single successor state.
//! 4. **Projects** its post-tick contents so the queue controller can relocate them.
//!
//! Evaluation is split from commit: [`IssueSlot::evaluate`] is pure and returns
//! the outputs with the next register values, [`IssueSlot::commit`] latches
//! them. [`IssueSlot::tick`] does both.

/// Per-tick input and output bundles.
pub mod io;
/// Dispatch and relocation views.
pub mod projection;
/// Readiness bits and wakeup matching.
pub mod readiness;
/// Grant-driven occupancy transitions.
pub mod transition;

use tracing::{debug, trace};

use self::io::{SlotDebug, SlotInputs, SlotOutputs};
use self::readiness::Resolved;
use self::transition::Issue;
use crate::common::error::SlotError;
use crate::common::tag::BranchMask;
use crate::config::SlotConfig;
use crate::core::uop::{MicroOp, Operand, SlotState};
use crate::core::wakeup::WakeupBus;

/// Registered state of a slot, latched at the tick boundary.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SlotRegs {
    /// Occupancy.
    pub state: SlotState,
    /// Sticky operand readiness (`p1`, `p2`).
    pub ready: [bool; 2],
    /// Resident record; its `bypass` field holds the one-tick bypass pulses.
    pub uop: MicroOp,
}

impl SlotRegs {
    /// Register values of an empty slot.
    #[inline]
    pub fn vacant() -> Self {
        Self::default()
    }
}

/// Which of the prioritized inputs decided the next register values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Override {
    /// No kill, load or clear; the slot computed its own successor.
    #[default]
    Computed,
    /// Pipeline-wide flush.
    Kill,
    /// Controller installed a new record.
    Load,
    /// Controller removed the resident entry.
    Clear,
}

/// Things that happened during one tick, for statistics and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TickEvents {
    /// Input that decided the next register values.
    pub decided_by: Override,
    /// What was dispatched (only meaningful with a grant).
    pub issue: Issue,
    /// The resident operation lies on a mispredicted path.
    pub branch_killed: bool,
    /// Slow-bus matches against the resident record.
    pub slow_hits: [bool; 2],
    /// Fast-bus match against the resident record.
    pub fast_hit: Option<Operand>,
    /// Operands whose readiness was masked by a bypass pulse this tick.
    pub suppressed: [bool; 2],
}

/// Result of evaluating one tick without committing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Combinational outputs for this tick.
    pub outputs: SlotOutputs,
    /// Register values to latch at the tick boundary.
    pub next: SlotRegs,
    /// What happened.
    pub events: TickEvents,
}

/// A single issue-queue entry.
#[derive(Clone, Debug)]
pub struct IssueSlot {
    config: SlotConfig,
    regs: SlotRegs,
}

impl IssueSlot {
    /// Creates an empty slot snooping buses shaped by `config`.
    pub fn new(config: SlotConfig) -> Self {
        Self {
            config,
            regs: SlotRegs::vacant(),
        }
    }

    /// Bus configuration this slot checks its inputs against.
    #[inline]
    pub const fn config(&self) -> &SlotConfig {
        &self.config
    }

    /// Current register values.
    #[inline]
    pub const fn regs(&self) -> &SlotRegs {
        &self.regs
    }

    /// Current occupancy.
    #[inline]
    pub const fn state(&self) -> SlotState {
        self.regs.state
    }

    /// Slot is occupied.
    #[inline]
    pub const fn valid(&self) -> bool {
        self.regs.state.is_valid()
    }

    /// Operand readiness visible this tick, bypass pulses applied.
    #[inline]
    pub const fn readiness(&self) -> [bool; 2] {
        readiness::effective(self.regs.ready, self.regs.uop.bypass)
    }

    /// Dispatch request for this tick. Depends only on registered state, so an
    /// arbiter may read it before driving grant.
    #[inline]
    pub const fn request(&self) -> bool {
        transition::requests(self.regs.state, self.readiness())
    }

    /// Computes this tick's outputs and the next register values.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the inputs violate the slot contract: a load
    /// into an occupied slot without `clear` or `kill`, a slow bus of the wrong
    /// width, or a branch mask wider than configured.
    pub fn evaluate(&self, io: &SlotInputs, bus: &WakeupBus) -> Result<Evaluation, SlotError> {
        self.check_inputs(io, bus)?;

        let state = self.regs.state;
        let resident = &self.regs.uop;
        let ready_now = self.readiness();
        let request = transition::requests(state, ready_now);

        let branch_killed = state.is_valid() && io.branch.kills(resident.branch_mask);
        let next_mask = io.branch.update(resident.branch_mask);

        let (granted_state, issue) = transition::on_grant(state, io.grant, ready_now);
        let computed_state = if branch_killed {
            SlotState::Empty
        } else {
            granted_state
        };

        let snooped = readiness::resolve(resident, state, self.regs.ready, bus);
        let projection =
            projection::resident_view(resident, issue, computed_state, next_mask, &snooped);
        let dispatch = (request && io.grant)
            .then(|| projection::dispatch_view(resident, issue, next_mask));

        let (decided_by, next) = Self::prioritize(io, bus, computed_state, &snooped, &projection);

        let outputs = SlotOutputs {
            valid: state.is_valid(),
            will_be_valid: state.is_valid() && !(io.grant && issue == Issue::Whole),
            request,
            request_hp: request && resident.high_priority,
            dispatch,
            projection,
            debug: SlotDebug {
                p1: ready_now[0],
                p2: ready_now[1],
                state,
            },
        };

        let events = TickEvents {
            decided_by,
            issue,
            branch_killed,
            slow_hits: if state.is_valid() {
                snooped.slow_hits
            } else {
                [false; 2]
            },
            fast_hit: snooped.fast_hit.filter(|_| state.is_valid()),
            suppressed: [
                state.is_valid() && self.regs.ready[0] && resident.bypass[0],
                state.is_valid() && self.regs.ready[1] && resident.bypass[1],
            ],
        };

        Ok(Evaluation {
            outputs,
            next,
            events,
        })
    }

    /// Latches register values produced by [`IssueSlot::evaluate`].
    #[inline]
    pub fn commit(&mut self, next: SlotRegs) {
        self.regs = next;
    }

    /// Evaluates one tick and commits it.
    ///
    /// # Errors
    ///
    /// Propagates [`IssueSlot::evaluate`] errors; on error nothing is committed.
    pub fn tick(&mut self, io: &SlotInputs, bus: &WakeupBus) -> Result<SlotOutputs, SlotError> {
        self.advance(io, bus).map(|(outputs, _)| outputs)
    }

    /// Like [`IssueSlot::tick`], also returning what happened during the tick.
    ///
    /// # Errors
    ///
    /// Propagates [`IssueSlot::evaluate`] errors; on error nothing is committed.
    pub fn advance(
        &mut self,
        io: &SlotInputs,
        bus: &WakeupBus,
    ) -> Result<(SlotOutputs, TickEvents), SlotError> {
        let eval = self.evaluate(io, bus)?;
        log_events(&eval);
        self.commit(eval.next);
        Ok((eval.outputs, eval.events))
    }

    /// Ordered override chain: kill, then load, then clear, then the computed
    /// successor. Produces exactly one set of next register values.
    fn prioritize(
        io: &SlotInputs,
        bus: &WakeupBus,
        computed_state: SlotState,
        snooped: &Resolved,
        projection: &MicroOp,
    ) -> (Override, SlotRegs) {
        if io.kill {
            return (Override::Kill, SlotRegs::vacant());
        }
        if let Some(incoming) = &io.load {
            return (Override::Load, Self::install(incoming, bus));
        }
        if io.clear {
            return (Override::Clear, SlotRegs::vacant());
        }
        if !computed_state.is_valid() {
            return (Override::Computed, SlotRegs::vacant());
        }
        (
            Override::Computed,
            SlotRegs {
                state: computed_state,
                ready: snooped.ready,
                uop: projection.clone(),
            },
        )
    }

    /// Register values after loading `incoming`.
    ///
    /// The record and its occupancy tag are taken verbatim. Readiness starts
    /// from its busy mirrors and still sees this tick's broadcasts, compared
    /// against the incoming tags. Any bypass pulse it carries was spent during
    /// the relocation tick, so only a fast match now raises a new one.
    fn install(incoming: &MicroOp, bus: &WakeupBus) -> SlotRegs {
        if !incoming.state.is_valid() {
            return SlotRegs::vacant();
        }
        let snooped =
            readiness::resolve(incoming, incoming.state, incoming.initial_readiness(), bus);
        let mut uop = incoming.clone();
        uop.bypass = snooped.bypass;
        SlotRegs {
            state: incoming.state,
            ready: snooped.ready,
            uop,
        }
    }

    fn check_inputs(&self, io: &SlotInputs, bus: &WakeupBus) -> Result<(), SlotError> {
        if io.load.is_some() && self.valid() && !io.clear && !io.kill {
            return Err(SlotError::OccupiedOverwrite {
                state: self.regs.state,
            });
        }
        if self.config.check_lane_count && bus.slow.len() != self.config.slow_wakeup_lanes {
            return Err(SlotError::LaneCountMismatch {
                expected: self.config.slow_wakeup_lanes,
                got: bus.slow.len(),
            });
        }
        let bits = self.config.branch_mask_bits;
        let masks = [
            ("resolve", Some(io.branch.resolve_mask)),
            ("mispredict", Some(io.branch.mispredict_mask)),
            ("load", io.load.as_ref().map(|uop| uop.branch_mask)),
        ];
        for (what, mask) in masks {
            if let Some(BranchMask(mask)) = mask.filter(|m| !m.fits(bits)) {
                return Err(SlotError::BranchMaskOutOfRange { what, mask, bits });
            }
        }
        Ok(())
    }
}

fn log_events(eval: &Evaluation) {
    let ev = &eval.events;
    let state = eval.outputs.debug.state;
    match ev.decided_by {
        Override::Kill if state.is_valid() => debug!(?state, "slot killed by flush"),
        Override::Load => debug!(
            ?state,
            next = ?eval.next.state,
            ready = ?eval.next.ready,
            "slot loaded"
        ),
        Override::Clear if state.is_valid() => debug!(?state, "slot cleared"),
        _ => {}
    }
    if ev.branch_killed {
        debug!(?state, "slot killed by branch misprediction");
    }
    if ev.issue.dispatched() {
        debug!(issue = ?ev.issue, split = ev.issue.is_split(), "slot dispatched");
    }
    if ev.slow_hits.contains(&true) {
        trace!(hits = ?ev.slow_hits, "slow wakeup matched");
    }
    if let Some(op) = ev.fast_hit {
        trace!(?op, "fast wakeup matched, bypass pulse raised");
    }
    if ev.suppressed.contains(&true) {
        trace!(suppressed = ?ev.suppressed, "readiness masked by bypass pulse");
    }
}
