//! Sequence Binary
//!
//! Samples balanced trial sequences from command-line flags or a JSON
//! parameter file. `--demo` walks through five reference designs.

use clap::Parser;
use eulerseq::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser)]
#[command(author, version, about = "Sample balanced trial sequences", long_about = None)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_STIMULI, help = "Number of stimuli")]
    stimuli: usize,
    #[arg(long, default_value_t = 0., help = "Share of catch trials, at most 0.5")]
    catch_frequency: Frequency,
    #[arg(long, help = "Connect the catch stimulus to every stimulus")]
    catch_to_all: bool,
    #[arg(long, help = "Exclude same-stimulus transitions")]
    no_stim_repeat: bool,
    #[arg(long, default_value_t = 1, help = "Occurrences of each transition per round")]
    pair_repeats: usize,
    #[arg(long, default_value_t = 1, help = "Rounds stitched into one sequence")]
    seq_repeats: usize,
    #[arg(long, help = "Balance triplets instead of pairs")]
    triplets: bool,
    #[arg(long, help = "First stimulus of the sequence")]
    start: Option<String>,
    #[arg(long, help = "Seed for reproducible sampling")]
    seed: Option<u64>,
    #[arg(long, help = "Read parameters from a JSON file instead of flags")]
    config: Option<std::path::PathBuf>,
    #[arg(long, help = "Print JSON instead of plain labels")]
    json: bool,
    #[arg(long, help = "Print transition and catch counts")]
    stats: bool,
    #[arg(long, help = "Run the reference designs")]
    demo: bool,
    #[arg(short, long, help = "Log debug output")]
    verbose: bool,
}

impl Args {
    fn parameters(&self) -> anyhow::Result<Parameters> {
        match self.config {
            Some(ref path) => Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?),
            None => Ok(Parameters {
                stimuli: self.stimuli,
                catch_frequency: self.catch_frequency,
                catch_to_all: self.catch_to_all,
                stim_repeat: !self.no_stim_repeat,
                pair_repeats: self.pair_repeats,
                seq_repeats: self.seq_repeats,
                triplets: self.triplets,
            }),
        }
    }
    fn start(&self) -> anyhow::Result<Option<Stimulus>> {
        Ok(self
            .start
            .as_deref()
            .map(Stimulus::try_from)
            .transpose()?)
    }
}

/// the five reference designs, with their fixed starts
fn demos() -> Vec<(&'static str, Parameters, Option<Stimulus>)> {
    vec![
        (
            "four stimuli, each pair once",
            Parameters::default(),
            None,
        ),
        (
            "three stimuli, no same-stimulus pairs, catch every fourth trial",
            Parameters {
                stimuli: 3,
                catch_frequency: 0.25,
                stim_repeat: false,
                ..Parameters::default()
            },
            Some(Stimulus::Trial(0)),
        ),
        (
            "equal catch precedence, each pair twice",
            Parameters {
                catch_to_all: true,
                pair_repeats: 2,
                ..Parameters::default()
            },
            None,
        ),
        (
            "five stimuli, two stitched rounds",
            Parameters {
                stimuli: 5,
                seq_repeats: 2,
                ..Parameters::default()
            },
            None,
        ),
        (
            "four stimuli, each triplet once",
            Parameters {
                triplets: true,
                stim_repeat: false,
                ..Parameters::default()
            },
            None,
        ),
    ]
}

fn report(args: &Args, parameters: &Parameters, sequence: &Sequence) -> anyhow::Result<()> {
    if args.json {
        let json = serde_json::json!({
            "parameters": parameters,
            "sequence": sequence,
        });
        println!("{}", serde_json::to_string(&json)?);
    } else {
        println!("{}", sequence);
    }
    if args.stats {
        let transitions = sequence.transitions();
        let real = transitions
            .iter()
            .filter(|((a, b), _)| !a.is_catch() && !b.is_catch())
            .map(|(_, &k)| k)
            .collect::<Vec<_>>();
        println!(
            "length {} | catches {} | distinct transitions {} | per transition {}..={}",
            sequence.len(),
            sequence.count(Stimulus::Catch),
            real.len(),
            real.iter().min().copied().unwrap_or(0),
            real.iter().max().copied().unwrap_or(0),
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    eulerseq::log(args.verbose);
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("sampling with seed {}", seed);
    let ref mut rng = SmallRng::seed_from_u64(seed);
    if args.demo {
        for (name, parameters, start) in demos() {
            log::info!("{}", name);
            let sequence = Experiment::try_from(parameters.clone())?.sequence(start, rng)?;
            report(&args, &parameters, &sequence)?;
        }
    } else {
        let parameters = args.parameters()?;
        let sequence = Experiment::try_from(parameters.clone())?.sequence(args.start()?, rng)?;
        report(&args, &parameters, &sequence)?;
    }
    Ok(())
}
