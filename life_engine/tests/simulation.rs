// Run-loop behavior: the loop steps at the configured cadence while the
// running flag is set and schedules nothing further once it is cleared.

use life_engine::{EngineConfig, Simulation};
use std::time::Duration;

fn config(tick_ms: u64) -> EngineConfig {
    EngineConfig {
        rows: 10,
        cols: 10,
        tick_interval: Duration::from_millis(tick_ms),
        alive_probability: 0.3,
    }
}

fn seed_blinker(sim: &Simulation) {
    for &(row, col) in &[(5, 4), (5, 5), (5, 6)] {
        sim.toggle_cell(row, col).unwrap();
    }
}

#[tokio::test]
async fn first_tick_fires_immediately() {
    let sim = Simulation::new(config(60_000));
    seed_blinker(&sim);
    let rx = sim.subscribe();

    sim.set_running(true);
    tokio::time::sleep(Duration::from_millis(200)).await;

    // One step despite a tick interval far longer than the wait.
    assert_eq!(rx.borrow().generation, 1);
}

#[tokio::test]
async fn run_loop_keeps_advancing_generations() {
    let sim = Simulation::new(config(10));
    seed_blinker(&sim);
    let rx = sim.subscribe();

    sim.set_running(true);
    tokio::time::sleep(Duration::from_millis(300)).await;
    sim.set_running(false);

    let snapshot = rx.borrow().clone();
    assert!(
        snapshot.generation >= 3,
        "expected several generations, got {}",
        snapshot.generation
    );
    // The blinker oscillates, so the grid still has exactly 3 live cells.
    assert_eq!(snapshot.grid.live_count(), 3);
}

#[tokio::test]
async fn stopping_prevents_further_steps() {
    let sim = Simulation::new(config(10));
    seed_blinker(&sim);
    let rx = sim.subscribe();

    sim.set_running(true);
    tokio::time::sleep(Duration::from_millis(100)).await;
    sim.set_running(false);

    // set_running(false) holds the engine lock, so once it returns no
    // further step can begin.
    let generation_at_stop = rx.borrow().generation;
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(rx.borrow().generation, generation_at_stop);
    assert!(!sim.is_running());
}

#[tokio::test]
async fn starting_twice_runs_a_single_loop() {
    let sim = Simulation::new(config(50));
    seed_blinker(&sim);
    let rx = sim.subscribe();

    sim.set_running(true);
    sim.set_running(true);
    tokio::time::sleep(Duration::from_millis(180)).await;
    sim.set_running(false);

    // A doubled loop would step roughly twice per interval; a single loop
    // stays well under that.
    let generation = rx.borrow().generation;
    assert!(
        (1..=5).contains(&generation),
        "expected a single loop's worth of steps, got {generation}"
    );
}

#[tokio::test]
async fn clearing_while_running_does_not_stop_the_loop() {
    let sim = Simulation::new(config(10));
    seed_blinker(&sim);
    let rx = sim.subscribe();

    sim.set_running(true);
    tokio::time::sleep(Duration::from_millis(60)).await;
    sim.clear();
    assert!(sim.is_running());

    // The loop keeps ticking over the now-empty grid.
    tokio::time::sleep(Duration::from_millis(60)).await;
    let snapshot = rx.borrow().clone();
    assert!(snapshot.running);
    assert!(snapshot.generation >= 1);
    assert_eq!(snapshot.grid.live_count(), 0);
    sim.set_running(false);
}

#[tokio::test]
async fn step_works_without_the_scheduler() {
    let sim = Simulation::new(config(10));
    seed_blinker(&sim);
    let rx = sim.subscribe();

    sim.step();
    sim.step();

    let snapshot = rx.borrow().clone();
    assert_eq!(snapshot.generation, 2);
    assert!(!snapshot.running);
    // Two steps return the blinker to its horizontal phase.
    assert!(snapshot.grid.get(5, 4));
    assert!(snapshot.grid.get(5, 5));
    assert!(snapshot.grid.get(5, 6));
}
