use geo_hunt::prelude::*;
use geo_hunt_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Demonstrates the JSON file backend: the spawn pass stays idempotent
/// across "restarts" because the presence check runs against what is on
/// disk, not against process memory.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let data_dir = std::env::temp_dir().join("geo_hunt_demo");
    let mut rng = StdRng::seed_from_u64(7);

    // First run: create a hunt and spawn its rewards.
    {
        let store = JsonFileStore::new(&data_dir);
        store.delete_all_hunts()?;

        store.create_hunt(Hunt::new(
            generate_id(&mut rng),
            GeoPoint::new(40.7484, -73.9857),
            250,
            "WLD",
            50.0,
            10,
            "Midtown scatter",
            "0xsponsor",
        ))?;

        let sampling = UniformDiscSampling::new();
        let report = SpawnCoordinator::new(&store, &sampling)
            .ensure_rewards_spawned(&store.list_hunts()?, &mut rng)?;
        println!("first run: spawned {} rewards", report.rewards_spawned);
    }

    // Second run over the same directory: nothing left to spawn.
    {
        let store = JsonFileStore::new(&data_dir);
        let sampling = UniformDiscSampling::new();
        let report = SpawnCoordinator::new(&store, &sampling)
            .ensure_rewards_spawned(&store.list_hunts()?, &mut rng)?;
        println!("second run: spawned {} rewards", report.rewards_spawned);

        let rewards = store.list_rewards()?;
        println!(
            "{} rewards on disk under {}",
            rewards.len(),
            store.data_dir().display()
        );

        // Claim one unit; the flag is durable like everything else.
        let target = &rewards[0];
        let claimed = ClaimProcessor::new(&store).claim(&target.reward_id, target.position())?;
        println!("claimed {} ({} left unclaimed)", claimed.reward_id, rewards.len() - 1);
    }

    Ok(())
}
