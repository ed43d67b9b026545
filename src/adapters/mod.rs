//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements         | Connects to                |
//! |---------------|--------------------|----------------------------|
//! | `hardware`    | SensorPort         | Simulated probes           |
//! |               | ButtonPort         | Scheduled buttons          |
//! |               | ActuatorPort       | Pump + status LED pins     |
//! | `log_sink`    | EventSink          | `log` facade               |
//! | `config_file` | ConfigPort         | JSON file / defaults       |
//! | `time`        | ClockPort          | `Instant` / virtual ticks  |

pub mod config_file;
pub mod hardware;
pub mod log_sink;
pub mod time;
