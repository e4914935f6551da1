use clap::Parser;
use market_merge::{cli, config, diagnose, error, loader, logging, pipeline, targets, verify};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    // --init은 아직 없는 설정 파일을 만들 수 있어야 한다
    let config = match &cli.command {
        Commands::Config { init: true, .. } => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    match cli.command {
        Commands::Merge { file_a, file_b, output, format } => {
            println!("🏪 market-merge - 병합\n");

            let run = pipeline::run_merge(&file_a, &file_b, &output, format, &config)?;

            println!("\n📊 합병 요약:");
            for row in run.summary.rows() {
                println!("  {:<12} {:>6}개 ({:.1}%)", row.label, row.count, row.percent);
            }
            if !run.issues.is_empty() {
                println!("\n⚠ 품질 이상:");
                for (kind, count) in run.issues.counts() {
                    if count > 0 {
                        println!("  - {}: {}건", kind, count);
                        if cli.verbose {
                            for issue in run.issues.examples(kind, 3) {
                                println!("      {}", issue);
                            }
                        }
                    }
                }
            }

            println!("\n✅ 병합 완료");
        }

        Commands::Diagnose { file_a, file_b, json } => {
            println!("🔍 market-merge - 데이터 손실 진단\n");
            let encodings = config.source_encodings()?;

            println!("[1/2] 원천 파일 읽는 중...");
            let table_a = loader::read_table(&file_a, &encodings)?;
            let table_b = loader::read_table(&file_b, &encodings)?;
            println!("✔ {}행 / {}행\n", table_a.len(), table_b.len());

            println!("[2/2] 진단 중...\n");
            let diagnosis = diagnose::diagnose(&table_a, &table_b, &config);
            diagnose::print_diagnosis(&diagnosis);

            if let Some(path) = json {
                let content = serde_json::to_string_pretty(&diagnosis)?;
                std::fs::write(&path, content)?;
                println!("✔ 진단 결과 저장: {}", path.display());
            }
        }

        Commands::Verify { input, columns } => {
            println!("🔎 market-merge - 채움률 확인\n");
            let table = loader::read_table(&input, &config.source_encodings()?)?;
            println!("{} ({}행)\n", input.display(), table.len());

            let rates = verify::fill_rates(&table, &columns);
            verify::print_fill_rates(&rates);
        }

        Commands::Targets { input, output } => {
            println!("📝 market-merge - 검색 대상 생성\n");
            let table = loader::read_table(&input, &config.source_encodings()?)?;

            let list = targets::build_targets(&table);
            let output = output.unwrap_or_else(|| std::path::PathBuf::from(&config.outputs.targets));
            let count = targets::write_targets(&output, &list)?;
            println!("✔ {}개 검색 대상 저장: {}", count, output.display());
            for target in list.iter().take(5) {
                println!("  - {}", target.query);
            }
        }

        Commands::Config { show, init, force } => {
            if init {
                let path = match cli.config.as_deref() {
                    Some(path) => path.to_path_buf(),
                    None => Config::config_path()?,
                };
                if path.exists() && !force && !confirm_overwrite(&path)? {
                    println!("설정 파일을 그대로 둡니다: {}", path.display());
                    return Ok(());
                }
                Config::default().save(&path)?;
                println!("✔ 기본 설정을 저장했습니다: {}", path.display());
            }

            if show || !init {
                println!("설정:");
                println!("  인코딩: {}", config.encodings.join(", "));
                println!("  주소 자리표시자: {:?}", config.address_placeholder);
                println!("  주소 매칭 최소 점수: {}", config.min_address_score);
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(format!("{} 이(가) 이미 있습니다. 덮어쓸까요?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| error::MarketMergeError::Config(format!("입력을 받을 수 없습니다: {}", e)))
}
