use geo_hunt::prelude::*;
use geo_hunt_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(2025);

    // A sponsor drops a 100 WLD pool over a 300 m disc around Alexanderplatz.
    let hunt = Hunt::new(
        generate_id(&mut rng),
        GeoPoint::new(52.5219, 13.4132),
        300,
        "WLD",
        100.0,
        20,
        "Alexanderplatz drop",
        "0xsponsor",
    )
    .with_description("Twenty pickups hidden around the plaza");
    store.create_hunt(hunt.clone())?;

    // Idempotent spawn pass, as it would run on every page load.
    let sampling = UniformDiscSampling::new();
    let coordinator = SpawnCoordinator::new(&store, &sampling);
    let report = coordinator.ensure_rewards_spawned(&store.list_hunts()?, &mut rng)?;
    println!(
        "spawned {} rewards across {} hunt(s)",
        report.rewards_spawned, report.hunts_spawned
    );

    // A second pass finds nothing to do.
    let report = coordinator.ensure_rewards_spawned(&store.list_hunts()?, &mut rng)?;
    assert_eq!(report, SpawnReport::default());

    // A participant inside the hunt disc is not yet close enough to a unit
    // that sits away from where they are standing.
    let participant = hunt.center();
    let rewards = store.list_rewards()?;
    let target = rewards
        .iter()
        .find(|r| participant.distance_m(&r.position()) > DEFAULT_CLAIMABLE_DISTANCE_M)
        .ok_or_else(|| anyhow::anyhow!("every unit landed on top of the participant"))?;

    let processor = ClaimProcessor::new(&store);
    match processor.claim(&target.reward_id, participant) {
        Err(e) => println!("claim from the hunt center: {e}"),
        Ok(_) => unreachable!("the chosen unit is outside the pickup gate"),
    }

    // Walking to the sampled point makes the claim succeed, once.
    let claimed = processor.claim(&target.reward_id, target.position())?;
    println!(
        "claimed {:.2} {} at ({:.5}, {:.5})",
        claimed.amount, hunt.reward_token, claimed.lat, claimed.lng
    );

    let err = processor
        .claim(&target.reward_id, target.position())
        .unwrap_err();
    println!("claiming again: {err}");

    Ok(())
}
