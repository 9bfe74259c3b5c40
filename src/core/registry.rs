//! # Converter Registry - 변환 컨텍스트
//!
//! (source 타입, target 타입) 쌍을 정확히 하나의 변환 함수에 매핑하는
//! 단일 진실 공급원입니다. 기동 시 한 번 채워지고 이후에는 읽기 전용으로
//! 동시에 조회됩니다.
//!
//! ## 생명주기
//!
//! ```text
//! Uninitialized ──initialize()──▶ Initializing ──성공──▶ Ready (enabled)
//!                                      │
//!                                      └──실패──▶ Failed (disabled)
//! ```
//!
//! - `initialize`는 인스턴스당 한 번만 호출할 수 있습니다. 첫 호출이 실패해도
//!   두 번째 호출은 `AlreadyInitialized`로 거부됩니다.
//! - `Ready`가 아닌 상태의 조회는 모두 `ConverterDisabled`입니다.
//! - 전역 싱글톤이 아닙니다. 애플리케이션 조립 지점이 `Arc<ConverterContext>`를
//!   소유하고 필요한 곳에 넘겨줍니다.
//!
//! ## 동시성
//!
//! - 변환기 맵은 `DashMap`이며 중복 검사는 `entry` API로 수행됩니다.
//!   같은 쌍에 대한 "확인 후 삽입"은 샤드 잠금 안에서 원자적으로 처리되므로
//!   후보 순회 순서나 스레드 수와 무관하게 두 번째 등록은 실패합니다.
//! - 초기화가 끝난 뒤에는 쓰기가 없으므로 조회는 샤드 읽기 잠금만 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bean_converter::config::ConverterProperties;
//! use bean_converter::core::candidate::Candidate;
//! use bean_converter::core::registry::ConverterContext;
//!
//! let context = Arc::new(ConverterContext::new());
//! context.initialize(
//!     &ConverterProperties::default(),
//!     vec![Candidate::function("user_do_to_bo", user_do_to_bo)],
//! )?;
//!
//! let bo: UserBO = context.convert(user_do)?;
//! ```

use std::any::{Any, TypeId, type_name};
use std::sync::{PoisonError, RwLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::config::ConverterProperties;
use crate::core::candidate::Candidate;
use crate::core::condition::Condition;
use crate::core::errors::{ConverterError, ConverterResult};
use crate::core::handler::{ConverterKind, Handler};
use crate::utils::string_utils::validate_required_string;

/// 변환 컨텍스트 생명주기 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

/// 초기화 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitializationSummary {
    /// 등록된 정적 변환기 수
    pub static_count: usize,
    /// 등록된 인스턴스 변환기 수
    pub instance_count: usize,
    /// 스캔 모드에 맞지 않아 건너뛴 후보 수
    pub skipped_count: usize,
}

impl InitializationSummary {
    pub fn total(&self) -> usize {
        self.static_count + self.instance_count
    }
}

/// 변환 컨텍스트
///
/// (source, target) → [`Handler`] 맵과 생명주기 상태를 소유합니다.
pub struct ConverterContext {
    action_map: DashMap<Condition, Handler>,
    state: RwLock<LifecycleState>,
}

impl ConverterContext {
    pub fn new() -> Self {
        Self {
            action_map: DashMap::new(),
            state: RwLock::new(LifecycleState::Uninitialized),
        }
    }

    /// 변환 컨텍스트를 초기화합니다
    ///
    /// 외부 스캔 단계가 발견한 후보들을 검증하고 등록합니다.
    ///
    /// # Arguments
    ///
    /// * `properties` - 스캔 모드와 strict 모드 설정
    /// * `candidates` - 발견된 변환 함수 후보
    ///
    /// # Errors
    ///
    /// * `ConverterError::AlreadyInitialized` - 두 번째 이후 호출 (인자와 무관)
    /// * `ConverterError::InvalidConfiguration` - 스캔 옵션 충돌, 후보 검사 전에 실패
    /// * `ConverterError::InvalidParameter` - 빈 패키지명 또는 빈 변환기 이름
    /// * `ConverterError::NonUniqueConverter` - 같은 쌍에 대한 두 번째 후보
    /// * `ConverterError::NoConverter` - strict 모드에서 등록된 변환기가 없음
    pub fn initialize<I>(
        &self,
        properties: &ConverterProperties,
        candidates: I,
    ) -> ConverterResult<InitializationSummary>
    where
        I: IntoIterator<Item = Candidate>,
    {
        self.begin_initialization()?;

        log::info!("Checkout configurations");
        let result = properties
            .validate()
            .and_then(|_| self.populate(properties, candidates));

        match result {
            Ok(summary) => {
                self.set_state(LifecycleState::Ready);
                log::info!(
                    "Conversion environment initialization completed ({} converters)",
                    summary.total()
                );
                Ok(summary)
            }
            Err(e) => {
                self.action_map.clear();
                self.set_state(LifecycleState::Failed);
                log::error!("Conversion environment initialization failed: {}", e);
                Err(e)
            }
        }
    }

    fn begin_initialization(&self) -> ConverterResult<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if *state != LifecycleState::Uninitialized {
            return Err(ConverterError::AlreadyInitialized(format!(
                "Conversion context can only be initialized once (current state: {:?})",
                *state
            )));
        }
        *state = LifecycleState::Initializing;
        Ok(())
    }

    fn populate<I>(
        &self,
        properties: &ConverterProperties,
        candidates: I,
    ) -> ConverterResult<InitializationSummary>
    where
        I: IntoIterator<Item = Candidate>,
    {
        log::info!("Start initialize conversion environment");

        let mut summary = InitializationSummary::default();
        for candidate in candidates {
            if !properties.accepts(candidate.kind()) {
                log::debug!(
                    "Skip {} converter \"{}\" by scan mode",
                    candidate.kind().as_str(),
                    candidate.name()
                );
                summary.skipped_count += 1;
                continue;
            }

            let kind = candidate.kind();
            self.register(candidate)?;
            match kind {
                ConverterKind::Static => summary.static_count += 1,
                ConverterKind::Instance => summary.instance_count += 1,
            }
        }

        if properties.scans_static() && summary.static_count == 0 {
            log::warn!("There is no any static conversion object");
        }
        if properties.scans_instance() && summary.instance_count == 0 {
            log::info!("There is no any non-static conversion object");
        }

        if properties.strict_mode && self.action_map.is_empty() {
            return Err(ConverterError::NoConverter(
                "There is no any converter exist".to_string(),
            ));
        }

        Ok(summary)
    }

    /// 후보 하나를 등록합니다
    ///
    /// 같은 쌍의 확인과 삽입은 하나의 `entry` 안에서 이루어집니다.
    pub(crate) fn register(&self, candidate: Candidate) -> ConverterResult<()> {
        validate_required_string(candidate.name(), "converter name")?;

        let condition = candidate.condition();
        match self.action_map.entry(condition) {
            Entry::Occupied(existing) => Err(ConverterError::NonUniqueConverter(format!(
                "\n{{converter: {}}}\n{{converter: {}}} convert source and target is the same {}",
                candidate.name(),
                existing.get().name(),
                condition
            ))),
            Entry::Vacant(slot) => {
                log::info!("Mapped \"{}\" onto {}", condition, candidate.name());
                slot.insert(candidate.into_handler());
                Ok(())
            }
        }
    }

    /// 정적 타입 쌍으로 변환 함수를 조회합니다
    ///
    /// # Errors
    ///
    /// * `ConverterError::ConverterDisabled` - 초기화 전이거나 초기화 실패
    /// * `ConverterError::NoConverter` - 정확히 일치하는 쌍이 없음
    pub fn lookup<S: 'static, T: 'static>(&self) -> ConverterResult<Handler> {
        self.lookup_condition(Condition::of::<S, T>())
    }

    pub fn lookup_condition(&self, condition: Condition) -> ConverterResult<Handler> {
        self.ensure_enabled()?;

        self.action_map
            .get(&condition)
            .map(|handler| handler.value().clone())
            .ok_or_else(|| {
                ConverterError::NoConverter(format!(
                    "The conversion method of matching \"{}\" was not found",
                    condition
                ))
            })
    }

    /// 값 하나를 변환합니다
    pub fn convert<S, T>(&self, source: S) -> ConverterResult<T>
    where
        S: Send + 'static,
        T: 'static,
    {
        self.lookup::<S, T>()?.invoke(source)
    }

    /// 없을 수 있는 값을 변환합니다
    ///
    /// `None`은 조회 없이 `Ok(None)`이 됩니다.
    pub fn convert_option<S, T>(&self, source: Option<S>) -> ConverterResult<Option<T>>
    where
        S: Send + 'static,
        T: 'static,
    {
        source.map(|value| self.convert(value)).transpose()
    }

    /// 값이 없으면 `on_missing`이 만든 에러를 그대로 반환합니다
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let bo: UserBO = context.convert_or_else(maybe_user, || AppError::UserNotFound)?;
    /// ```
    pub fn convert_or_else<S, T, E, F>(&self, source: Option<S>, on_missing: F) -> Result<T, E>
    where
        S: Send + 'static,
        T: 'static,
        E: From<ConverterError>,
        F: FnOnce() -> E,
    {
        match source {
            Some(value) => self.convert(value).map_err(E::from),
            None => Err(on_missing()),
        }
    }

    /// 런타임 타입으로 변환합니다
    ///
    /// source 쪽 키는 값의 실제 `TypeId`입니다. 값의 타입 이름은 알 수 없으므로
    /// 매칭 실패 메시지에는 target 타입만 표시됩니다.
    pub fn convert_dyn<T: 'static>(&self, source: Box<dyn Any + Send>) -> ConverterResult<T> {
        self.ensure_enabled()?;

        let condition = Condition::from_ids(
            (*source).type_id(),
            type_name::<dyn Any + Send>(),
            TypeId::of::<T>(),
            type_name::<T>(),
        );
        let handler = self
            .action_map
            .get(&condition)
            .map(|handler| handler.value().clone())
            .ok_or_else(|| {
                ConverterError::NoConverter(format!(
                    "The conversion method from the given value to \"{}\" was not found",
                    type_name::<T>()
                ))
            })?;

        let result = handler.invoke_dyn(source)?;
        handler.downcast_result(result)
    }

    fn ensure_enabled(&self) -> ConverterResult<()> {
        if self.is_enabled() {
            Ok(())
        } else {
            Err(ConverterError::ConverterDisabled(
                "Conversion context is not initialized".to_string(),
            ))
        }
    }

    fn set_state(&self, next: LifecycleState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// 초기화에 성공해 조회가 가능한 상태인지 확인
    pub fn is_enabled(&self) -> bool {
        self.state() == LifecycleState::Ready
    }

    /// `initialize`가 한 번이라도 호출되었는지 확인
    pub fn is_initialized(&self) -> bool {
        self.state() != LifecycleState::Uninitialized
    }

    pub fn len(&self) -> usize {
        self.action_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.action_map.is_empty()
    }

    pub fn contains<S: 'static, T: 'static>(&self) -> bool {
        self.action_map.contains_key(&Condition::of::<S, T>())
    }

    /// 등록된 모든 핸들러 (이름순)
    pub fn handlers(&self) -> Vec<Handler> {
        let mut handlers: Vec<Handler> = self
            .action_map
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        handlers.sort_by(|a, b| a.name().cmp(b.name()));
        handlers
    }

    /// 등록된 모든 (source, target) 쌍 (source, target 타입 이름순)
    pub fn conditions(&self) -> Vec<Condition> {
        let mut conditions: Vec<Condition> = self.action_map.iter().map(|entry| *entry.key()).collect();
        conditions.sort_by_key(|c| (c.source_name(), c.target_name()));
        conditions
    }
}

impl Default for ConverterContext {
    fn default() -> Self {
        Self::new()
    }
}
