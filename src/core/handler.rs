//! 등록된 변환 함수 핸들

use std::any::{Any, type_name};
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::core::condition::Condition;
use crate::core::errors::{BoxError, ConverterError, ConverterResult};

/// 타입이 지워진 변환 함수
///
/// 인자 타입 검사는 등록 시점에 생성된 래퍼 안에서 한 번 수행됩니다.
pub(crate) type ConvertFn =
    dyn Fn(Box<dyn Any + Send>) -> Result<Box<dyn Any + Send>, BoxError> + Send + Sync;

/// 변환기 종류
///
/// | 종류 | 원본 형태 | 스캔 |
/// |------|-----------|------|
/// | `Static` | 자유 함수 `fn(S) -> T` | `converter!` 매크로 + inventory |
/// | `Instance` | 소유 객체에 바인딩된 메서드 `fn(&O, S) -> T` | 애플리케이션이 넘겨주는 빈 목록 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConverterKind {
    Static,
    Instance,
}

impl ConverterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConverterKind::Static => "static",
            ConverterKind::Instance => "instance",
        }
    }
}

/// 변환 컨텍스트에 바인딩된 변환 함수
///
/// 복제 비용은 `Arc` 두 개 수준입니다. 조회 결과로 반환되어
/// 호출자가 잠금 없이 직접 호출할 수 있습니다.
#[derive(Clone)]
pub struct Handler {
    name: Arc<str>,
    kind: ConverterKind,
    condition: Condition,
    owner: Option<Arc<dyn Any + Send + Sync>>,
    function: Arc<ConvertFn>,
}

impl Handler {
    pub(crate) fn new(
        name: Arc<str>,
        kind: ConverterKind,
        condition: Condition,
        owner: Option<Arc<dyn Any + Send + Sync>>,
        function: Arc<ConvertFn>,
    ) -> Self {
        Self { name, kind, condition, owner, function }
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

    /// 인스턴스 변환기의 소유 객체
    pub fn owner(&self) -> Option<&Arc<dyn Any + Send + Sync>> {
        self.owner.as_ref()
    }

    /// 소유 객체를 구체 타입으로 꺼냅니다
    ///
    /// 정적 변환기이거나 타입이 다르면 `None`을 반환합니다.
    pub fn owner_as<O: Send + Sync + 'static>(&self) -> Option<Arc<O>> {
        self.owner.clone().and_then(|owner| owner.downcast::<O>().ok())
    }

    /// 타입이 지워진 값으로 변환 함수를 호출합니다
    ///
    /// # Errors
    ///
    /// * `ConverterError::ConvertFailed` - 인자 타입 불일치, 변환 함수의 에러 반환,
    ///   호출 중 패닉
    pub fn invoke_dyn(&self, source: Box<dyn Any + Send>) -> ConverterResult<Box<dyn Any + Send>> {
        if (*source).type_id() != self.condition.source() {
            return Err(ConverterError::convert_failed_msg(format!(
                "Call converter \"{}\" failed: argument is not {}",
                self.name,
                self.condition.source_name()
            )));
        }

        log::debug!("Call converter \"{}\" {}", self.name, self.condition);

        match catch_unwind(AssertUnwindSafe(|| (self.function)(source))) {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => Err(ConverterError::convert_failed(
                format!("Call converter \"{}\" failed", self.name),
                e,
            )),
            Err(panic) => Err(ConverterError::convert_failed_msg(format!(
                "Call converter \"{}\" panicked: {}",
                self.name,
                panic_message(panic.as_ref())
            ))),
        }
    }

    /// 정적 타입으로 변환 함수를 호출하고 결과를 `T`로 꺼냅니다
    pub fn invoke<S, T>(&self, source: S) -> ConverterResult<T>
    where
        S: Send + 'static,
        T: 'static,
    {
        let result = self.invoke_dyn(Box::new(source))?;
        self.downcast_result(result)
    }

    /// 변환 결과를 `T`로 꺼냅니다
    pub(crate) fn downcast_result<T: 'static>(&self, result: Box<dyn Any + Send>) -> ConverterResult<T> {
        result.downcast::<T>().map(|boxed| *boxed).map_err(|_| {
            ConverterError::convert_failed_msg(format!(
                "Result of converter \"{}\" can not be cast to {}",
                self.name,
                type_name::<T>()
            ))
        })
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("condition", &self.condition)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
