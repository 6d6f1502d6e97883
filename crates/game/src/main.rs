use clap::Parser;

use flashlight::battery::BatteryConfig;

#[derive(Parser, Debug)]
#[command(name = "blackout", about = "First-person flashlight demo")]
struct Args {
    /// Run without a window (simulation only)
    #[arg(long)]
    headless: bool,

    /// Charge drained per second while the light is on
    #[arg(long)]
    drain_rate: Option<f32>,

    /// Charge restored per second while recharging
    #[arg(long)]
    recharge_rate: Option<f32>,

    /// Spare batteries carried at start
    #[arg(long)]
    spares: Option<u32>,

    /// Disable passive recharging entirely
    #[arg(long)]
    no_recharge: bool,

    /// Never drain the battery
    #[arg(long)]
    infinite_battery: bool,
}

fn main() {
    let args = Args::parse();

    let mut config = BatteryConfig::default();
    if let Some(drain_rate) = args.drain_rate {
        config.drain_rate = drain_rate;
    }
    if let Some(recharge_rate) = args.recharge_rate {
        config.recharge_rate = recharge_rate;
    }
    if let Some(spares) = args.spares {
        config.max_spares = spares.max(config.max_spares);
        config.initial_spares = spares;
    }
    config.recharge_enabled = !args.no_recharge;
    config.drain_enabled = !args.infinite_battery;

    game::app::create_app(args.headless, config).run();
}
