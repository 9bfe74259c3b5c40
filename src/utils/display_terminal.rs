//! 터미널 출력 포맷팅 유틸리티
//!
//! 변환 컨텍스트 초기화 결과를 박스 형태의 제목, 진행 단계,
//! 매핑 목록으로 시각적으로 출력합니다.

use crate::core::handler::Handler;
use crate::core::registry::InitializationSummary;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// print_boxed_title("CONVERSION CONTEXT");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                CONVERSION CONTEXT                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Scanning converters
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Converters registered (3 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 등록된 매핑 한 줄을 표시합니다
///
/// ```text
///    ├─ user_do_to_bo [static]: {source = UserDO, target = UserBO}
/// ```
pub fn print_mapping(handler: &Handler) {
    println!("{}", mapping_line(handler));
}

fn mapping_line(handler: &Handler) -> String {
    format!(
        "   ├─ {} [{}]: {}",
        handler.name(),
        handler.kind().as_str(),
        handler.condition()
    )
}

/// 최종 완료 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║        🎉 CONVERSION CONTEXT INITIALIZED         ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Static converters: 2
///    🔧 Instance converters: 1
///    🚀 Total converters: 3
/// ```
pub fn print_final_summary(summary: &InitializationSummary) {
    println!();
    print_boxed_title("🎉 CONVERSION CONTEXT INITIALIZED");
    println!("   📦 Static converters: {}", summary.static_count);
    println!("   🔧 Instance converters: {}", summary.instance_count);
    if summary.skipped_count > 0 {
        println!("   ⏭️ Skipped by scan mode: {}", summary.skipped_count);
    }
    println!("   🚀 Total converters: {}", summary.total());
    println!();
}
