//! # Converter Scanner - 컴포넌트 스캔
//!
//! 정적 변환 함수는 `converter!` 매크로로 `inventory`에 제출되고,
//! 기동 시 스캐너가 설정된 스캔 패키지(모듈 경로 접두사)로 걸러
//! [`Candidate`] 목록을 만듭니다. 인스턴스 변환기는 애플리케이션이
//! 직접 생성한 빈 목록으로 전달됩니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@Converter` 클래스의 static 메서드 | `converter!(fn_name)` |
//! | `@ComponentScan(basePackages)` | `scan_packages` (모듈 경로 접두사) |
//! | 클래스패스 스캔 | `inventory::iter` (링크 타임 수집) |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use bean_converter::converter;
//!
//! pub fn user_do_to_bo(user: UserDO) -> UserBO { /* ... */ }
//! converter!(user_do_to_bo);
//!
//! pub fn parse_age(raw: String) -> Result<u32, std::num::ParseIntError> { raw.parse() }
//! converter!(try parse_age);
//! ```

use once_cell::sync::Lazy;

use crate::core::candidate::Candidate;
use crate::core::errors::ConverterResult;
use crate::utils::string_utils::{is_in_package, validate_required_string};

/// inventory에 제출되는 정적 변환기 등록 정보
pub struct ConverterRegistration {
    /// 변환기 이름 (로그, 중복 메시지용)
    pub name: &'static str,
    /// 제출된 모듈 경로 (`module_path!()`)
    pub package: &'static str,
    /// 후보 생성자
    pub constructor: fn() -> Candidate,
}

inventory::collect!(ConverterRegistration);

/// 제출된 등록 정보 캐시 (패키지, 이름 순)
static REGISTRATION_CACHE: Lazy<Vec<&'static ConverterRegistration>> = Lazy::new(|| {
    let mut registrations: Vec<&'static ConverterRegistration> =
        inventory::iter::<ConverterRegistration>().collect();
    registrations.sort_by(|a, b| (a.package, a.name).cmp(&(b.package, b.name)));

    log::debug!("{} static converters submitted", registrations.len());
    registrations
});

/// 제출된 모든 정적 변환기 등록 정보
pub fn registrations() -> &'static [&'static ConverterRegistration] {
    REGISTRATION_CACHE.as_slice()
}

/// 스캔 패키지에 속한 정적 변환기 후보를 수집합니다
///
/// 패키지 목록이 비어 있으면 전체를 스캔합니다. 패키지가 서로 겹쳐도
/// 같은 등록 정보는 한 번만 수집됩니다.
///
/// # Errors
///
/// * `ConverterError::InvalidParameter` - 공백뿐인 패키지명
pub fn collect_static_candidates(scan_packages: &[String]) -> ConverterResult<Vec<Candidate>> {
    let packages = scan_packages
        .iter()
        .map(|package| validate_required_string(package, "scan package"))
        .collect::<ConverterResult<Vec<String>>>()?;

    let candidates: Vec<Candidate> = registrations()
        .iter()
        .filter(|registration| {
            packages.is_empty()
                || packages
                    .iter()
                    .any(|package| is_in_package(registration.package, package))
        })
        .map(|registration| {
            log::debug!(
                "Found static converter \"{}\" in {}",
                registration.name,
                registration.package
            );
            (registration.constructor)()
        })
        .collect();

    if candidates.is_empty() {
        log::warn!("No static converter found in packages {:?}", packages);
    }
    Ok(candidates)
}

/// 정적 변환 함수를 inventory에 제출합니다
///
/// - `converter!(fn_name)` - `fn(S) -> T`
/// - `converter!(try fn_name)` - `fn(S) -> Result<T, E>`
#[macro_export]
macro_rules! converter {
    (try $function:ident) => {
        $crate::inventory::submit! {
            $crate::core::scanner::ConverterRegistration {
                name: stringify!($function),
                package: module_path!(),
                constructor: || {
                    $crate::core::candidate::Candidate::try_function(stringify!($function), $function)
                },
            }
        }
    };
    ($function:ident) => {
        $crate::inventory::submit! {
            $crate::core::scanner::ConverterRegistration {
                name: stringify!($function),
                package: module_path!(),
                constructor: || {
                    $crate::core::candidate::Candidate::function(stringify!($function), $function)
                },
            }
        }
    };
}
