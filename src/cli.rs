use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "market-merge")]
#[command(about = "전통시장 공공데이터 병합·매칭 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 설정 파일 (기본: ~/.config/market-merge/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 두 원천 파일을 매칭·병합
    Merge {
        /// 첫 번째 파일 (시장 현황)
        #[arg(required = true)]
        file_a: PathBuf,

        /// 두 번째 파일 (전국 표준데이터)
        #[arg(required = true)]
        file_b: PathBuf,

        /// 출력 디렉터리
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// 출력 형식 (csv/excel/both)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
    },

    /// 병합 전 데이터 손실 진단
    Diagnose {
        /// 첫 번째 파일 (시장 현황)
        #[arg(required = true)]
        file_a: PathBuf,

        /// 두 번째 파일 (전국 표준데이터)
        #[arg(required = true)]
        file_b: PathBuf,

        /// 진단 결과를 JSON으로 저장
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// 병합 결과의 컬럼별 채움률 확인
    Verify {
        /// 병합 결과 CSV
        #[arg(required = true)]
        input: PathBuf,

        /// 확인할 컬럼 (쉼표 구분, 생략 시 전체)
        #[arg(short, long, value_delimiter = ',')]
        columns: Vec<String>,
    },

    /// 리뷰 수집용 검색 대상 목록 생성
    Targets {
        /// 병합 결과 CSV (보통 매칭 데이터)
        #[arg(required = true)]
        input: PathBuf,

        /// 출력 파일 (기본: 설정의 targets 이름)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 설정 표시/초기화
    Config {
        /// 설정 표시
        #[arg(long)]
        show: bool,

        /// 기본 설정을 설정 파일에 저장
        #[arg(long)]
        init: bool,

        /// 기존 설정 파일을 묻지 않고 덮어씀
        #[arg(long)]
        force: bool,
    },
}
