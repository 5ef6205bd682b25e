//! A started service wired to mock hardware and a fake clock.

use deskthermo::app::service::DeskService;
use deskthermo::config::DeskConfig;

use crate::mock_hw::{FakeClock, MockHardware, RecordingSink};

pub struct Rig {
    pub app: DeskService,
    pub hw: MockHardware,
    pub clock: FakeClock,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with(DeskConfig::default(), MockHardware::new())
    }

    pub fn with_config(config: DeskConfig) -> Self {
        Self::with(config, MockHardware::new())
    }

    pub fn with(config: DeskConfig, mut hw: MockHardware) -> Self {
        let mut app = DeskService::new(config).expect("valid config");
        let clock = FakeClock::default();
        let mut sink = RecordingSink::default();
        app.start(&mut hw, &clock, &mut sink);
        Self {
            app,
            hw,
            clock,
            sink,
        }
    }

    pub fn tick(&mut self) {
        self.app.tick(&mut self.hw, &mut self.clock, &mut self.sink);
    }

    /// Tick until the clock reaches `t_ms`.
    pub fn run_until(&mut self, t_ms: u64) {
        while self.clock.now < t_ms {
            self.tick();
        }
    }

    /// Press and release the encoder button over two ticks.
    pub fn click_encoder(&mut self) {
        self.hw.encoder_button = Ok(false);
        self.tick();
        self.hw.encoder_button = Ok(true);
        self.tick();
    }
}
