//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements    | Connects to                                 |
//! |------------|---------------|---------------------------------------------|
//! | `hardware` | SensorPort    | AHT20, APDS9960 (shared I2C)                |
//! |            | InputPort     | Seesaw encoder, main-button GPIO            |
//! |            | ActuatorPort  | LED GPIOs, LEDC buzzer, HT16K33 display     |
//! | `log_sink` | EventSink     | Serial log output                           |
//! | `time`     | ClockPort     | ESP32 system timer / host `Instant`         |

pub mod hardware;
pub mod log_sink;
pub mod time;
