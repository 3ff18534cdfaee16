// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in content tables.
//!
//! Tables are plain tuples so new records are a one-line change; the store
//! converts them into owned records once at startup.

use crate::types::{Coordinates, LocationCategory};

/// (id, name, description, details)
pub(super) const TECHNOLOGIES: &[(&str, &str, &str, &str)] = &[
    (
        "green-hydrogen",
        "Green Hydrogen",
        "Electrolysis systems that turn surplus renewable power into storable hydrogen.",
        "Our proton-exchange membrane stacks run at variable load, following wind and solar \
         output minute by minute. Hydrogen is compressed on site and fed to ammonia synthesis, \
         refinery hydrotreating, or fuel-cell trucks. Stack lifetime exceeds 80,000 operating hours.",
    ),
    (
        "digital-twin",
        "Digital Twin Platform",
        "Live simulation models of plants, grids and buildings.",
        "Sensor streams from thousands of field devices are mirrored into a physics-informed model \
         that forecasts equipment wear and schedules maintenance before failures occur. Operators \
         test control changes on the twin before touching the real asset.",
    ),
    (
        "carbon-capture",
        "Carbon Capture",
        "Post-combustion capture retrofits for cement and steel plants.",
        "Amine-based absorbers remove up to ninety percent of flue-gas CO2. Captured carbon is \
         compressed for geological storage or sold as feedstock for synthetic fuels and building \
         aggregates.",
    ),
    (
        "smart-grid",
        "Smart Grid Control",
        "Software that balances distributed generation, storage and demand.",
        "Battery fleets, rooftop solar and flexible industrial loads are dispatched as one virtual \
         power plant. Frequency response is delivered in under two hundred milliseconds.",
    ),
    (
        "advanced-materials",
        "Advanced Materials",
        "Lightweight composites and corrosion-resistant alloys for harsh environments.",
        "Our materials laboratory qualifies fibre-reinforced polymers for pipeline wraps, offshore \
         platforms and rail rolling stock, cutting structural weight by up to forty percent.",
    ),
];

/// (id, name, excerpt, body, sector, location id)
pub(super) const PROJECTS: &[(&str, &str, &str, &str, &str, Option<&str>)] = &[
    (
        "zagros-solar-park",
        "Zagros Solar Park",
        "A 600 MW photovoltaic plant with integrated battery storage.",
        "Built across three phases on high plateau land, the park pairs bifacial modules with \
         single-axis trackers. A 400 MWh battery shifts midday output into the evening peak, and a \
         local training academy has certified more than nine hundred technicians.",
        "Energy",
        Some("zagros-site"),
    ),
    (
        "coastal-water-security",
        "Coastal Water Security Programme",
        "Securing drinking water for two million residents along the coast.",
        "The programme delivers a seawater desalination plant powered entirely by dedicated solar \
         capacity, a 140 km transmission main, and smart metering that cut distribution losses by a \
         third in its first year.",
        "Water",
        Some("coastal-site"),
    ),
    (
        "caspian-logistics-hub",
        "Caspian Logistics Hub",
        "A multimodal port linking rail, road and sea freight.",
        "Automated stacking cranes and a digital customs corridor reduced container dwell time from \
         six days to under forty hours. The hub handles grain, steel and consumer goods.",
        "Infrastructure",
        Some("caspian-site"),
    ),
    (
        "green-steel-pilot",
        "Green Steel Pilot",
        "Direct reduction of iron ore with hydrogen instead of natural gas.",
        "A 250,000-tonne pilot shaft furnace validates hydrogen-based reduction at industrial scale. \
         Emissions per tonne of steel fall by more than seventy percent compared with the blast \
         furnace route.",
        "Industry",
        None,
    ),
    (
        "urban-mobility-corridor",
        "Urban Mobility Corridor",
        "Electric bus rapid transit across the metropolitan core.",
        "Thirty-two kilometres of dedicated lanes, fifty-one stations and a fleet of battery buses \
         charged overnight at two depots. Average commute times along the corridor dropped by \
         twenty-five minutes.",
        "Transport",
        None,
    ),
];

/// (id, title, ISO date, excerpt, body)
pub(super) const NEWS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "annual-results-2024",
        "Atlas Group reports record annual results",
        "2025-03-12",
        "Revenue grew eighteen percent, led by renewable energy and water infrastructure.",
        "The board will propose an increased dividend at the general assembly. Order intake reached \
         a new high, with long-term service contracts now making up a third of the backlog.",
    ),
    (
        "hydrogen-partnership",
        "New hydrogen partnership with European utilities",
        "2025-02-03",
        "A joint venture will build electrolysis capacity for export-grade green ammonia.",
        "The first phase covers 300 MW of electrolysers and a shipping terminal. Offtake agreements \
         with two utilities secure demand for fifteen years.",
    ),
    (
        "innovation-hub-opening",
        "Innovation Hub opens its doors",
        "2024-11-20",
        "A new campus brings research teams and start-ups under one roof.",
        "The hub hosts laboratories for materials testing, a digital twin studio and an incubator \
         programme that has already selected twelve start-ups for its first cohort.",
    ),
    (
        "sustainability-report",
        "Sustainability report shows emissions down 22 percent",
        "2024-09-05",
        "Scope 1 and 2 emissions fell for the fourth consecutive year.",
        "Energy efficiency retrofits, on-site solar and a shift to electric site vehicles drove the \
         reduction. Water intensity improved by eleven percent.",
    ),
    (
        "scholarship-programme",
        "Engineering scholarships for 150 students",
        "2024-06-17",
        "The Atlas Foundation expands its scholarship programme to four new universities.",
        "Scholars receive full tuition, a mentor from the engineering staff and a paid summer \
         placement at one of our project sites.",
    ),
];

/// (id, name, description, lat, lng, category)
pub(super) const LOCATIONS: &[(&str, &str, &str, f64, f64, LocationCategory)] = &[
    (
        "headquarters",
        "Group Headquarters",
        "Corporate offices and executive leadership.",
        35.6892,
        51.3890,
        LocationCategory::Headquarters,
    ),
    (
        "dubai-office",
        "Regional Office Dubai",
        "Commercial and project finance team for the Gulf region.",
        25.2048,
        55.2708,
        LocationCategory::Office,
    ),
    (
        "paris-office",
        "European Office Paris",
        "Partnerships and investor relations for Europe.",
        48.8566,
        2.3522,
        LocationCategory::Office,
    ),
    (
        "zagros-site",
        "Zagros Solar Park",
        "600 MW photovoltaic plant with battery storage.",
        33.4877,
        48.3558,
        LocationCategory::Project,
    ),
    (
        "coastal-site",
        "Coastal Water Plant",
        "Solar-powered drinking water plant.",
        27.1832,
        56.2666,
        LocationCategory::Project,
    ),
    (
        "caspian-site",
        "Caspian Logistics Hub",
        "Multimodal freight port.",
        37.4723,
        49.4623,
        LocationCategory::Project,
    ),
    (
        "innovation-campus",
        "Innovation Hub Campus",
        "Research laboratories and start-up incubator.",
        35.7219,
        51.3347,
        LocationCategory::Research,
    ),
];

pub(super) fn coordinates(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}
