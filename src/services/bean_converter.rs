//! # Bean Converter
//!
//! 공유 변환 컨텍스트 위에서 단건/목록 변환을 제공하는 파사드입니다.
//!
//! ## 목록 변환 변형
//!
//! | 메서드 | 실행 | `None` 요소 |
//! |--------|------|-------------|
//! | `convert_list` | 순차 | 같은 위치에 `None` |
//! | `convert_list_or_else` | 순차 | `on_missing` 에러 |
//! | `non_null_convert` | 순차 | 변환 전 제거 |
//! | `parallel_convert_list` | 병렬 | 같은 위치에 `None` |
//! | `parallel_convert_list_or_else` | 병렬 | `on_missing` 에러 |
//! | `non_null_parallel_convert` | 병렬 | 변환 전 제거 |
//!
//! 병렬 변형도 결과 순서는 입력 순서와 같습니다. 요소 하나라도 실패하면
//! 목록 전체가 실패합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let converter = BeanConverter::new(Arc::clone(&context));
//!
//! let bo: UserBO = converter.convert(user_do)?;
//! let bos: Vec<UserBO> = converter.non_null_parallel_convert(user_dos)?;
//! ```

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::core::errors::{ConverterError, ConverterResult};
use crate::core::registry::ConverterContext;

/// 변환 파사드
///
/// 복제해도 같은 컨텍스트를 공유합니다.
#[derive(Clone)]
pub struct BeanConverter {
    context: Arc<ConverterContext>,
}

impl BeanConverter {
    pub fn new(context: Arc<ConverterContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &Arc<ConverterContext> {
        &self.context
    }

    /// 단건 변환
    pub fn convert<S, T>(&self, source: S) -> ConverterResult<T>
    where
        S: Send + 'static,
        T: 'static,
    {
        self.context.convert(source)
    }

    /// 단건 변환, `None`은 `None`
    pub fn convert_option<S, T>(&self, source: Option<S>) -> ConverterResult<Option<T>>
    where
        S: Send + 'static,
        T: 'static,
    {
        self.context.convert_option(source)
    }

    /// 단건 변환, `None`이면 `on_missing` 에러
    pub fn convert_or_else<S, T, E, F>(&self, source: Option<S>, on_missing: F) -> Result<T, E>
    where
        S: Send + 'static,
        T: 'static,
        E: From<ConverterError>,
        F: FnOnce() -> E,
    {
        self.context.convert_or_else(source, on_missing)
    }

    /// 목록 순차 변환, `None` 요소는 그대로 `None`
    pub fn convert_list<S, T>(&self, source: Vec<Option<S>>) -> ConverterResult<Vec<Option<T>>>
    where
        S: Send + 'static,
        T: 'static,
    {
        source
            .into_iter()
            .map(|item| self.convert_option(item))
            .collect()
    }

    /// 목록 순차 변환, `None` 요소를 만나면 `on_missing` 에러
    pub fn convert_list_or_else<S, T, E, F>(
        &self,
        source: Vec<Option<S>>,
        on_missing: F,
    ) -> Result<Vec<T>, E>
    where
        S: Send + 'static,
        T: 'static,
        E: From<ConverterError>,
        F: Fn() -> E,
    {
        source
            .into_iter()
            .map(|item| self.convert_or_else(item, &on_missing))
            .collect()
    }

    /// 목록 순차 변환, `None` 요소는 제거
    pub fn non_null_convert<S, T>(&self, source: Vec<Option<S>>) -> ConverterResult<Vec<T>>
    where
        S: Send + 'static,
        T: 'static,
    {
        source
            .into_iter()
            .flatten()
            .map(|item| self.convert(item))
            .collect()
    }

    /// 목록 병렬 변환, `None` 요소는 그대로 `None`
    pub fn parallel_convert_list<S, T>(
        &self,
        source: Vec<Option<S>>,
    ) -> ConverterResult<Vec<Option<T>>>
    where
        S: Send + 'static,
        T: Send + 'static,
    {
        parallel_map(source, |item| self.convert_option(item))
    }

    /// 목록 병렬 변환, `None` 요소를 만나면 `on_missing` 에러
    pub fn parallel_convert_list_or_else<S, T, E, F>(
        &self,
        source: Vec<Option<S>>,
        on_missing: F,
    ) -> Result<Vec<T>, E>
    where
        S: Send + 'static,
        T: Send + 'static,
        E: From<ConverterError> + Send,
        F: Fn() -> E + Sync,
    {
        parallel_map(source, |item| self.convert_or_else(item, &on_missing))
    }

    /// 목록 병렬 변환, `None` 요소는 제거
    pub fn non_null_parallel_convert<S, T>(&self, source: Vec<Option<S>>) -> ConverterResult<Vec<T>>
    where
        S: Send + 'static,
        T: Send + 'static,
    {
        let present: Vec<S> = source.into_iter().flatten().collect();
        parallel_map(present, |item| self.convert(item))
    }
}

/// 사용 가능한 코어 수만큼의 스레드로 [`parallel_map_with`]를 호출합니다
fn parallel_map<I, O, E, F>(items: Vec<I>, f: F) -> Result<Vec<O>, E>
where
    I: Send,
    O: Send,
    E: Send,
    F: Fn(I) -> Result<O, E> + Sync,
{
    let workers = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    parallel_map_with(items, workers, f)
}

/// 입력을 연속 구간으로 나눠 scoped 스레드에서 변환하고 순서대로 합칩니다
///
/// 한 구간이 실패하면 나머지 구간은 다음 요소로 넘어가기 전에 멈춥니다.
/// 반환되는 에러는 실패한 구간 중 하나의 에러입니다. 앞 구간이 플래그를 보고
/// 자기 실패 요소에 닿기 전에 멈출 수 있으므로 입력 순서상 첫 실패라는 보장은 없습니다.
fn parallel_map_with<I, O, E, F>(items: Vec<I>, workers: usize, f: F) -> Result<Vec<O>, E>
where
    I: Send,
    O: Send,
    E: Send,
    F: Fn(I) -> Result<O, E> + Sync,
{
    let total = items.len();
    let workers = workers.min(total);

    if workers <= 1 {
        return items.into_iter().map(f).collect();
    }

    let chunk_size = total.div_ceil(workers);
    let mut chunks: Vec<Vec<I>> = Vec::with_capacity(workers);
    let mut remaining = items.into_iter();
    loop {
        let chunk: Vec<I> = remaining.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }

    let failed = AtomicBool::new(false);
    let f = &f;
    let failed_flag = &failed;

    thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                scope.spawn(move || -> Option<Result<Vec<O>, E>> {
                    let mut converted = Vec::with_capacity(chunk.len());
                    for item in chunk {
                        if failed_flag.load(Ordering::Relaxed) {
                            return None;
                        }
                        match f(item) {
                            Ok(value) => converted.push(value),
                            Err(e) => {
                                failed_flag.store(true, Ordering::Relaxed);
                                return Some(Err(e));
                            }
                        }
                    }
                    Some(Ok(converted))
                })
            })
            .collect();

        let mut results = Vec::with_capacity(total);
        let mut chunk_error = None;
        for handle in handles {
            match handle.join() {
                Ok(Some(Ok(converted))) => {
                    if chunk_error.is_none() {
                        results.extend(converted);
                    }
                }
                Ok(Some(Err(e))) => {
                    if chunk_error.is_none() {
                        chunk_error = Some(e);
                    }
                }
                // 다른 구간의 실패로 중단됨
                Ok(None) => {}
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        match chunk_error {
            Some(e) => Err(e),
            None => Ok(results),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConverterProperties;
    use crate::core::candidate::Candidate;
    use crate::domain::users::{UserBO, UserDO};
    use crate::services::user_converter::{user_bo_to_do, user_do_to_bo};

    #[derive(Debug, PartialEq)]
    enum AppError {
        UserMissing,
        Converter(String),
    }

    impl From<ConverterError> for AppError {
        fn from(e: ConverterError) -> Self {
            AppError::Converter(e.to_string())
        }
    }

    fn converter() -> BeanConverter {
        let context = Arc::new(ConverterContext::new());
        context
            .initialize(
                &ConverterProperties::default(),
                vec![
                    Candidate::function("user_do_to_bo", user_do_to_bo),
                    Candidate::try_function("user_bo_to_do", user_bo_to_do),
                    Candidate::try_function("checked_double", |n: u64| {
                        n.checked_mul(2).ok_or("overflow")
                    }),
                ],
            )
            .unwrap();
        BeanConverter::new(context)
    }

    fn users() -> Vec<Option<UserDO>> {
        vec![
            Some(UserDO::new("1111", 34, true)),
            None,
            Some(UserDO::new("222", 55, false)),
        ]
    }

    #[test]
    fn test_convert_copies_fields() {
        let bo: UserBO = converter().convert(UserDO::new("A", 34, true)).unwrap();
        assert_eq!(bo, UserBO::new("A", 34, true));
    }

    #[test]
    fn test_convert_missing_value() {
        let converter = converter();

        let none: Option<UserBO> = converter.convert_option::<UserDO, _>(None).unwrap();
        assert!(none.is_none());

        let err = converter
            .convert_or_else::<UserDO, UserBO, _, _>(None, || AppError::UserMissing)
            .unwrap_err();
        assert_eq!(err, AppError::UserMissing);
    }

    #[test]
    fn test_convert_wraps_handler_failure() {
        let err = converter()
            .convert::<UserBO, UserDO>(UserBO::new("", 1, true))
            .unwrap_err();
        assert!(matches!(err, ConverterError::ConvertFailed { .. }));
    }

    #[test]
    fn test_non_null_convert_drops_missing() {
        let bos: Vec<UserBO> = converter().non_null_convert(users()).unwrap();
        assert_eq!(bos, vec![UserBO::new("1111", 34, true), UserBO::new("222", 55, false)]);
    }

    #[test]
    fn test_convert_list_passes_missing_through() {
        let bos: Vec<Option<UserBO>> = converter().convert_list(users()).unwrap();
        assert_eq!(
            bos,
            vec![
                Some(UserBO::new("1111", 34, true)),
                None,
                Some(UserBO::new("222", 55, false)),
            ]
        );
    }

    #[test]
    fn test_convert_list_or_else_raises_supplied_error() {
        let converter = converter();
        let result: Result<Vec<UserBO>, AppError> =
            converter.convert_list_or_else(users(), || AppError::UserMissing);
        assert_eq!(result.unwrap_err(), AppError::UserMissing);

        let present = vec![Some(UserDO::new("x", 1, true))];
        let bos: Vec<UserBO> = converter
            .convert_list_or_else(present, || AppError::UserMissing)
            .unwrap();
        assert_eq!(bos.len(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let converter = converter();
        let source: Vec<Option<UserDO>> = (0..1000)
            .map(|i| {
                if i % 7 == 0 {
                    None
                } else {
                    Some(UserDO::new(format!("user-{}", i), i, i % 2 == 0))
                }
            })
            .collect();

        let sequential: Vec<Option<UserBO>> = converter.convert_list(source.clone()).unwrap();
        let parallel: Vec<Option<UserBO>> = converter.parallel_convert_list(source.clone()).unwrap();
        assert_eq!(sequential, parallel);

        let sequential: Vec<UserBO> = converter.non_null_convert(source.clone()).unwrap();
        let parallel: Vec<UserBO> = converter.non_null_parallel_convert(source).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel[0].name, "user-1");
    }

    #[test]
    fn test_parallel_non_null_drops_missing() {
        let bos: Vec<UserBO> = converter().non_null_parallel_convert(users()).unwrap();
        assert_eq!(bos, vec![UserBO::new("1111", 34, true), UserBO::new("222", 55, false)]);
    }

    #[test]
    fn test_parallel_or_else_raises_supplied_error() {
        let result: Result<Vec<UserBO>, AppError> =
            converter().parallel_convert_list_or_else(users(), || AppError::UserMissing);
        assert_eq!(result.unwrap_err(), AppError::UserMissing);
    }

    #[test]
    fn test_parallel_fails_fast_on_handler_error() {
        let mut source: Vec<Option<u64>> = (0..500).map(Some).collect();
        source[250] = Some(u64::MAX);

        let err = converter()
            .parallel_convert_list::<u64, u64>(source)
            .unwrap_err();
        assert!(matches!(err, ConverterError::ConvertFailed { .. }));
    }

    #[test]
    fn test_parallel_map_with_keeps_order_across_chunks() {
        let items: Vec<u32> = (0..1000).collect();
        let doubled: Vec<u32> =
            parallel_map_with(items, 4, |n| Ok::<u32, String>(n * 2)).unwrap();

        assert_eq!(doubled.len(), 1000);
        assert!(doubled.iter().enumerate().all(|(i, n)| *n == i as u32 * 2));
    }

    #[test]
    fn test_parallel_map_with_more_workers_than_items() {
        let squared: Vec<u32> =
            parallel_map_with(vec![1, 2, 3], 16, |n: u32| Ok::<u32, String>(n * n)).unwrap();
        assert_eq!(squared, vec![1, 4, 9]);
    }

    #[test]
    fn test_parallel_map_with_stops_other_chunks_on_failure() {
        use std::sync::atomic::AtomicUsize;
        use std::time::Duration;

        let calls = AtomicUsize::new(0);
        let items: Vec<u32> = (0..1000).collect();

        let result = parallel_map_with(items, 4, |n| {
            calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(1));
            if n == 100 { Err(format!("item {} failed", n)) } else { Ok(n) }
        });

        assert_eq!(result.unwrap_err(), "item 100 failed");
        assert!(calls.load(Ordering::SeqCst) < 1000);
    }

    #[test]
    fn test_empty_input() {
        let converter = converter();
        let empty: Vec<Option<UserDO>> = Vec::new();

        assert!(converter.convert_list::<UserDO, UserBO>(empty.clone()).unwrap().is_empty());
        assert!(converter
            .non_null_parallel_convert::<UserDO, UserBO>(empty.clone())
            .unwrap()
            .is_empty());
        assert!(converter
            .parallel_convert_list::<UserDO, UserBO>(empty)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_disabled_context() {
        let converter = BeanConverter::new(Arc::new(ConverterContext::new()));
        let err = converter
            .non_null_convert::<UserDO, UserBO>(users())
            .unwrap_err();
        assert!(matches!(err, ConverterError::ConverterDisabled(_)));
    }
}
