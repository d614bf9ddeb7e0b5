use broadside::env::{encode_action, BattleshipEnv};
use broadside::{init_logging, Agent, ProbabilityAgent, RandomAgent, FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <seed> <episodes> [random|probability]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let episodes: usize = args[2].parse()?;
    let agent_name = args.get(3).map(String::as_str).unwrap_or("probability");
    let mut agent: Box<dyn Agent> = match agent_name {
        "random" => Box::new(RandomAgent::new()),
        "probability" => Box::new(ProbabilityAgent::new(FLEET)),
        other => anyhow::bail!("unknown agent '{}'", other),
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut env = BattleshipEnv::new();
    let mut steps = Vec::with_capacity(episodes);
    let mut scores = Vec::with_capacity(episodes);

    for _ in 0..episodes {
        env.reset(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
        agent.reset();
        loop {
            let guesses = *env.game().players()[0].guesses();
            let Some(target) = agent.select_target(&mut rng, &guesses) else {
                anyhow::bail!("agent ran out of targets before winning");
            };
            let action = encode_action(target.0, target.1)
                .ok_or_else(|| anyhow::anyhow!("agent chose off-board target {:?}", target))?;
            let step = env.step(action);
            agent.handle_outcome(target, step.outcome, env.game().players()[0].guesses());
            if step.done {
                break;
            }
        }
        steps.push(env.game().step());
        scores.push(env.score());
    }

    let mean = |v: &[f64]| if v.is_empty() { 0.0 } else { v.iter().sum::<f64>() / v.len() as f64 };
    let steps_f: Vec<f64> = steps.iter().map(|&s| s as f64).collect();
    let scores_f: Vec<f64> = scores.iter().map(|&s| s as f64).collect();

    let result = json!({
        "agent": agent_name,
        "episodes": episodes,
        "mean_steps": mean(&steps_f),
        "min_steps": steps.iter().min(),
        "max_steps": steps.iter().max(),
        "mean_score": mean(&scores_f),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
