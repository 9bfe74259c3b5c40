//! # Converter Candidate
//!
//! 스캔 단계에서 발견되어 등록을 기다리는 변환 함수입니다.
//! 등록 전에는 이름과 스캔 모드만 검증되며, "인자 하나, 반환값 하나"라는
//! 형태는 생성자 시그니처가 컴파일 타임에 보장합니다.
//!
//! ## 생성 방법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bean_converter::core::candidate::Candidate;
//!
//! // 정적 변환기 (자유 함수)
//! let candidate = Candidate::function("user_do_to_bo", user_do_to_bo);
//!
//! // 인스턴스 변환기 (소유 객체에 바인딩된 메서드)
//! let formatter = Arc::new(UserFormatter::new("Mr."));
//! let candidate = Candidate::method(formatter, "user_to_display", UserFormatter::to_display);
//! ```

use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;

use crate::core::condition::Condition;
use crate::core::errors::BoxError;
use crate::core::handler::{ConvertFn, ConverterKind, Handler};

/// 등록 대기 중인 변환 함수
pub struct Candidate {
    name: String,
    kind: ConverterKind,
    condition: Condition,
    owner: Option<Arc<dyn Any + Send + Sync>>,
    function: Arc<ConvertFn>,
}

impl Candidate {
    /// 실패하지 않는 정적 변환 함수
    pub fn function<S, T, F>(name: impl Into<String>, f: F) -> Self
    where
        S: Send + 'static,
        T: Send + 'static,
        F: Fn(S) -> T + Send + Sync + 'static,
    {
        Self::try_function(name, move |source: S| Ok::<T, BoxError>(f(source)))
    }

    /// `Result`를 반환하는 정적 변환 함수
    ///
    /// 반환된 에러는 호출 시 `ConverterError::ConvertFailed`의 원인으로 감싸집니다.
    pub fn try_function<S, T, E, F>(name: impl Into<String>, f: F) -> Self
    where
        S: Send + 'static,
        T: Send + 'static,
        E: Into<BoxError>,
        F: Fn(S) -> Result<T, E> + Send + Sync + 'static,
    {
        let function = move |source: Box<dyn Any + Send>| -> Result<Box<dyn Any + Send>, BoxError> {
            let source = downcast_source::<S>(source)?;
            f(source)
                .map(|target| Box::new(target) as Box<dyn Any + Send>)
                .map_err(Into::into)
        };

        Self {
            name: name.into(),
            kind: ConverterKind::Static,
            condition: Condition::of::<S, T>(),
            owner: None,
            function: Arc::new(function),
        }
    }

    /// 실패하지 않는 인스턴스 변환 메서드
    pub fn method<O, S, T, F>(owner: Arc<O>, name: impl Into<String>, f: F) -> Self
    where
        O: Send + Sync + 'static,
        S: Send + 'static,
        T: Send + 'static,
        F: Fn(&O, S) -> T + Send + Sync + 'static,
    {
        Self::try_method(owner, name, move |o: &O, source: S| Ok::<T, BoxError>(f(o, source)))
    }

    /// `Result`를 반환하는 인스턴스 변환 메서드
    ///
    /// 소유 객체는 핸들러가 살아있는 동안 함께 유지됩니다.
    pub fn try_method<O, S, T, E, F>(owner: Arc<O>, name: impl Into<String>, f: F) -> Self
    where
        O: Send + Sync + 'static,
        S: Send + 'static,
        T: Send + 'static,
        E: Into<BoxError>,
        F: Fn(&O, S) -> Result<T, E> + Send + Sync + 'static,
    {
        let bound = Arc::clone(&owner);
        let function = move |source: Box<dyn Any + Send>| -> Result<Box<dyn Any + Send>, BoxError> {
            let source = downcast_source::<S>(source)?;
            f(&bound, source)
                .map(|target| Box::new(target) as Box<dyn Any + Send>)
                .map_err(Into::into)
        };

        Self {
            name: name.into(),
            kind: ConverterKind::Instance,
            condition: Condition::of::<S, T>(),
            owner: Some(owner as Arc<dyn Any + Send + Sync>),
            function: Arc::new(function),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ConverterKind {
        self.kind
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub(crate) fn into_handler(self) -> Handler {
        Handler::new(
            Arc::from(self.name),
            self.kind,
            self.condition,
            self.owner,
            self.function,
        )
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("condition", &self.condition)
            .finish()
    }
}

fn downcast_source<S: 'static>(source: Box<dyn Any + Send>) -> Result<S, BoxError> {
    source
        .downcast::<S>()
        .map(|boxed| *boxed)
        .map_err(|_| BoxError::from(format!("argument is not {}", type_name::<S>())))
}
