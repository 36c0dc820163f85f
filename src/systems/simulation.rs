//! Game simulation system
//!
//! Manages the game loop simulation including:
//! - Delta time and wall clock measurement
//! - Controller → session control hand-off
//! - Ticking the session and reporting its events

use std::time::Instant;
use aerofire_core::{FrameTime, GameEvent, RenderSnapshot, Session, SessionState};
use aerofire_input::FlightController;

/// Drives a [`Session`] from real time
///
/// The session clamps oversized deltas itself; this only measures them.
pub struct SimulationSystem {
    started: Instant,
    last_frame: Instant,
    log_events: bool,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            log_events: false,
        }
    }

    /// Log every event at info instead of only audio cues
    pub fn with_event_logging(mut self, enabled: bool) -> Self {
        self.log_events = enabled;
        self
    }

    /// Measure the time since the previous frame
    pub fn next_frame(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        FrameTime::new(delta, now - self.started)
    }

    /// Start the run; flight keys count from this moment on
    pub fn start(&self, session: &mut Session, controller: &mut FlightController) -> bool {
        let started = session.start();
        if started {
            controller.set_active(true);
        }
        started
    }

    /// Play again after a game over
    pub fn restart(&self, session: &mut Session, controller: &mut FlightController) -> bool {
        let restarted = session.restart();
        if restarted {
            controller.set_active(true);
        }
        restarted
    }

    /// Run one simulation frame
    ///
    /// Presses are only accepted by the controller while a run is in progress
    /// or over, so the title screen ignores flight keys.
    pub fn update(&mut self, session: &mut Session, controller: &mut FlightController) -> RenderSnapshot {
        let frame = self.next_frame();
        self.step(session, controller, frame)
    }

    /// Run one frame with an explicit frame time
    pub fn step(
        &mut self,
        session: &mut Session,
        controller: &mut FlightController,
        frame: FrameTime,
    ) -> RenderSnapshot {
        controller.apply(session);
        let snapshot = session.tick(frame);
        controller.set_active(snapshot.state != SessionState::NotStarted);

        for event in &snapshot.events {
            self.report(event);
        }
        snapshot
    }

    /// Log an event; audio cues stand in for sound playback
    fn report(&self, event: &GameEvent) {
        if event.is_audio_cue() {
            log::info!("[audio] {}", audio_cue_name(event));
        } else if self.log_events {
            log::info!("{:?}", event);
        } else {
            log::trace!("{:?}", event);
        }
    }
}

/// Sound a host would play for an audio cue event
fn audio_cue_name(event: &GameEvent) -> &'static str {
    match event {
        GameEvent::ProjectileFired { .. } => "laser",
        GameEvent::TargetDestroyed { .. } => "explosion",
        GameEvent::TargetCollected { .. } => "chime",
        _ => "none",
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerofire_core::{SimConfig, Variant};
    use std::time::Duration;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_frames_measure_forward() {
        let mut sim = SimulationSystem::new();
        std::thread::sleep(Duration::from_millis(20));
        let frame = sim.next_frame();
        assert!(frame.delta >= 0.02);
        assert!(frame.wall_clock >= Duration::from_millis(20));

        let second = sim.next_frame();
        assert!(second.wall_clock >= frame.wall_clock);
    }

    #[test]
    fn test_controller_activates_after_start() {
        let mut sim = SimulationSystem::new();
        let mut session = Session::new(SimConfig::for_variant(Variant::RingRun).with_seed(1));
        let mut controller = FlightController::new();
        let frame = FrameTime::new(1.0 / 60.0, Duration::ZERO);

        sim.step(&mut session, &mut controller, frame);
        assert!(!controller.is_active());

        session.start();
        let snapshot = sim.step(&mut session, &mut controller, frame);
        assert!(controller.is_active());
        assert!(snapshot.events.contains(&GameEvent::Started));
    }

    #[test]
    fn test_key_pressed_right_after_start_counts() {
        let mut sim = SimulationSystem::new();
        let mut session = Session::new(SimConfig::for_variant(Variant::RingRun).with_seed(1));
        let mut controller = FlightController::new();
        let frame = FrameTime::new(1.0 / 60.0, Duration::ZERO);

        sim.step(&mut session, &mut controller, frame);
        assert!(sim.start(&mut session, &mut controller));
        // Pressed before the first playing tick
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        sim.step(&mut session, &mut controller, frame);

        assert!(session.controls().forward);
        assert!(!sim.start(&mut session, &mut controller));
    }

    #[test]
    fn test_restart_activates_controller() {
        let sim = SimulationSystem::new();
        let mut session = Session::new(SimConfig::for_variant(Variant::RingRun).with_seed(1));
        let mut controller = FlightController::new();

        // Nothing to restart from the title screen
        assert!(!sim.restart(&mut session, &mut controller));
        assert!(!controller.is_active());

        // Idle plane sinks into the ground
        session.start();
        for _ in 0..100 {
            session.tick(FrameTime::new(0.1, Duration::ZERO));
        }
        assert_eq!(session.state(), SessionState::GameOver);

        controller.set_active(false);
        assert!(sim.restart(&mut session, &mut controller));
        assert!(controller.is_active());
        assert_eq!(session.state(), SessionState::Playing);
    }

    #[test]
    fn test_audio_cues_named() {
        let mut session = Session::new(SimConfig::for_variant(Variant::AsteroidHunt).with_seed(1));
        session.start();
        let snapshot = session.tick(FrameTime::new(1.0 / 60.0, Duration::ZERO));

        let cues: Vec<&str> = snapshot
            .events
            .iter()
            .filter(|e| e.is_audio_cue())
            .map(audio_cue_name)
            .collect();
        // Spawning is bookkeeping, not sound
        assert!(cues.is_empty());

        session.request_fire();
        let snapshot = session.tick(FrameTime::new(1.0 / 60.0, Duration::from_millis(16)));
        let fired = snapshot.events.iter().find(|e| e.is_audio_cue());
        assert_eq!(fired.map(audio_cue_name), Some("laser"));
    }

    #[test]
    fn test_held_keys_reach_session() {
        let mut sim = SimulationSystem::new();
        let mut session = Session::new(SimConfig::for_variant(Variant::RingRun).with_seed(1));
        let mut controller = FlightController::new();
        let frame = FrameTime::new(1.0 / 60.0, Duration::ZERO);

        session.start();
        sim.step(&mut session, &mut controller, frame);
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        sim.step(&mut session, &mut controller, frame);

        assert!(session.controls().forward);
    }
}
