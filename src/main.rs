use clap::{Args, Parser, Subcommand};

use pipe_hydraulics_toolbox::piping::{self, FittingCounts, PipeFlowInput};
use pipe_hydraulics_toolbox::{app, config};

/// 명령행 정의. 서브커맨드 없이 실행하면 대화형 메뉴로 진입한다.
#[derive(Debug, Parser)]
#[command(name = "pipe_hydraulics_toolbox", about = "단일 배관 수두손실/압력강하 계산기")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 번의 계산을 수행하고 결과 레코드를 JSON으로 출력한다.
    Calc(CalcArgs),
}

/// 계산 입력. 모두 계산기 내부 기준 단위(영국식)이다.
#[derive(Debug, Args)]
struct CalcArgs {
    /// 체적 유량 [GPM]
    #[arg(long)]
    gpm: f64,
    /// 배관 내경 [in]
    #[arg(long)]
    diameter: f64,
    /// 직관 길이 [ft]
    #[arg(long)]
    length: f64,
    /// 점도 [cP]
    #[arg(long)]
    viscosity: f64,
    /// 비중 (물=1)
    #[arg(long, default_value_t = 1.0)]
    spgr: f64,
    /// 수직 상승 [ft]
    #[arg(long, default_value_t = 0.0)]
    rise: f64,
    /// 90° 엘보 개수
    #[arg(long, default_value_t = 0.0)]
    nineties: f64,
    /// 45° 엘보 개수
    #[arg(long, default_value_t = 0.0)]
    fortyfives: f64,
    /// 티(분기류) 개수
    #[arg(long, default_value_t = 0.0)]
    tee_branches: f64,
    /// 티(직통류) 개수
    #[arg(long, default_value_t = 0.0)]
    tee_lines: f64,
    /// 글로브 밸브 개수
    #[arg(long, default_value_t = 0.0)]
    globes: f64,
    /// 게이트 밸브 개수
    #[arg(long, default_value_t = 0.0)]
    gates: f64,
    /// 스윙 체크 밸브 개수
    #[arg(long, default_value_t = 0.0)]
    swings: f64,
    /// 앵글 밸브 개수
    #[arg(long, default_value_t = 0.0)]
    angles: f64,
    /// Darcy 잔차 차트를 출력에 포함한다
    #[arg(long)]
    with_chart: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Calc(args)) => run_calc(args),
        None => {
            let mut cfg = config::load_or_default()?;
            app::run(&mut cfg)?;
            Ok(())
        }
    }
}

fn run_calc(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = PipeFlowInput {
        flow_gpm: args.gpm,
        diameter_in: args.diameter,
        straight_length_ft: args.length,
        viscosity_cp: args.viscosity,
        specific_gravity: args.spgr,
        vertical_rise_ft: args.rise,
        fittings: FittingCounts {
            nineties: args.nineties,
            fortyfives: args.fortyfives,
            tee_branches: args.tee_branches,
            tee_lines: args.tee_lines,
            globe_valves: args.globes,
            gate_valves: args.gates,
            swing_checks: args.swings,
            angle_valves: args.angles,
        },
    };
    app::validate_input(&input)?;
    let mut result = piping::calculate(&input);
    if !args.with_chart {
        // 차트는 진단용이라 요청 시에만 출력에 싣는다.
        result.darcy_chart.clear();
    }
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
