//! Fixed action plans attached to each scenario result.

use crate::ScenarioKind;

/// The ordered action plan for `kind`.  Returned verbatim; never generated.
pub fn recommendations(kind: ScenarioKind) -> &'static [&'static str] {
    match kind {
        ScenarioKind::Delay => &[
            "Prioritize high-speed trains and adjust local train schedules to minimize platform congestion.",
            "Communicate revised ETAs to passengers and connecting stations immediately.",
            "Analyze the root cause of the delay to prevent future occurrences.",
            "Temporarily increase headway between following trains to create buffer time.",
        ],
        ScenarioKind::Breakdown => &[
            "Dispatch the nearest emergency engineering team to the breakdown location.",
            "Reroute all approaching traffic to alternative tracks or loop lines.",
            "Arrange for a rescue locomotive to tow the failed train to the nearest yard.",
            "Provide clear updates to affected passengers regarding the rescue operation timeline.",
        ],
        ScenarioKind::Weather => &[
            "Impose a temporary speed restriction across the entire affected section.",
            "Increase patrol frequency to monitor track conditions, signals, and overhead lines.",
            "Activate contingency plans for potential waterlogging at low-lying stations.",
            "Advise passengers of potential widespread delays and offer ticket flexibility.",
        ],
        ScenarioKind::Maintenance => &[
            "Establish a clear block corridor for the maintenance crew with safety protocols.",
            "Divert all traffic using pre-defined alternative routes for the duration of the repair.",
            "Coordinate with station masters to manage passenger flow and platform changes.",
            "Conduct a post-repair inspection and speed test before resuming normal operations.",
        ],
        ScenarioKind::Signal => &[
            "Switch to manual authorization protocols for train movement in the affected area.",
            "Deploy technical staff to the nearest signal cabin for on-site diagnosis.",
            "Instruct locomotive pilots to proceed with extreme caution and reduced visibility rules.",
            "Run a full system diagnostic after the fault is rectified to ensure system integrity.",
        ],
        ScenarioKind::Passenger => &[
            "Arrange for paramedics and station staff to meet the train at the next designated stop.",
            "Make onboard announcements to inform other passengers of the unscheduled stop.",
            "Coordinate with control to minimize the delay to the schedule post-emergency.",
            "Log the incident and the total delay incurred for performance review.",
        ],
    }
}
