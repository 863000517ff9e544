use clap::Parser;
use ipset_configmap::config::toml_config::TomlConfig;
use ipset_configmap::core::ConfigProvider;
use ipset_configmap::utils::error::ErrorSeverity;
use ipset_configmap::utils::{logger, validation::Validate};
use ipset_configmap::{create_config_map_params, IpsetEngine, IpsetPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-ipset")]
#[command(about = "Build the ipset config map from a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "ipset-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - build the config map and print a summary without writing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let verbose = args.verbose || config.verbose();
    if config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    let storage = LocalStorage::new(".".to_string());
    let pipeline = IpsetPipeline::new(storage, config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        perform_dry_run(&pipeline).await?;
        return Ok(());
    }

    let engine = IpsetEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Config map written");
            println!("✅ Config map written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Network list: {}", config.net_list_path());
    if config.mac_list_path().is_empty() {
        println!("  MAC list: (none)");
    } else {
        println!("  MAC list: {}", config.mac_list_path());
    }
    println!("  Output: {}/{}", config.output_path(), config.output_file());
    println!("  Pretty JSON: {}", config.pretty_output());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

async fn perform_dry_run(
    pipeline: &IpsetPipeline<LocalStorage, TomlConfig>,
) -> Result<(), Box<dyn std::error::Error>> {
    use ipset_configmap::core::Pipeline;

    let inventory = pipeline.extract().await?;

    println!("🔍 Dry Run Analysis:");
    println!("  Networks in list: {}", inventory.net_list.items.len());
    println!("  MAC reservation sources: {}", inventory.mac_list.items.len());

    let params = match create_config_map_params(&inventory.net_list, &inventory.mac_list) {
        Ok(params) => params,
        Err(failure) => {
            println!(
                "  ❌ Build would fail after {} networks: {}",
                failure.partial.networks_map.len(),
                failure.source
            );
            return Err(failure.into());
        }
    };

    println!();
    println!("🌐 Networks:");
    for (key, net) in &params.networks_map {
        println!("  {} ({}) {} vlan {}", key, net.name, net.cidr, net.vlan);
    }

    println!();
    println!("🧩 Roles:");
    for (name, role) in &params.roles_map {
        println!("  {}: {} nodes on {} networks", name, role.nodes.len(), role.networks.len());
        for (hostname, node) in &role.nodes {
            println!("    [{}] {} ({} addresses)", node.index, hostname, node.ip_addr.len());
        }
    }

    println!();
    println!("✅ Dry run analysis complete.");

    Ok(())
}
