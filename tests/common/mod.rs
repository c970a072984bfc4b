//! 测试用内存后端
#![allow(dead_code)]

use answer_desk::clients::QuestionApi;
use answer_desk::error::ApiError;
use answer_desk::models::{
    AnswerResult, HealthStatus, Letter, Question, UploadRequest, UploadResponse,
};
use answer_desk::services::NoticeBoard;
use answer_desk::workflow::{QuestionListManager, SubmissionController};
use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 注入的失败方式
#[derive(Debug, Clone)]
pub enum Failure {
    /// 后端返回结构化错误
    Backend { status: u16, error: Option<String> },
    /// 网络不可达
    Transport(String),
}

impl Failure {
    fn into_error(self, endpoint: &str) -> ApiError {
        match self {
            Failure::Backend { status, error } => ApiError::bad_response(endpoint, status, error),
            Failure::Transport(message) => ApiError::request_failed(
                endpoint,
                io::Error::new(io::ErrorKind::ConnectionRefused, message),
            ),
        }
    }
}

#[derive(Debug, Default)]
struct Store {
    questions: Vec<Question>,
    next_id: i64,
}

/// 行为与真实后端一致的内存实现，并统计每类请求次数
pub struct FakeBackend {
    store: Mutex<Store>,
    answer: Letter,
    pub create_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub report_calls: AtomicUsize,
    fail_create: Mutex<Option<Failure>>,
    fail_list: Mutex<Option<Failure>>,
    fail_delete: Mutex<Option<Failure>>,
    fail_report: Mutex<Option<Failure>>,
    /// 为 true 时 create 在返回前让出一次执行权
    pub yield_on_create: bool,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::answering(Letter::B)
    }

    /// 所有新题目都以 `answer` 作为 AI 答案
    pub fn answering(answer: Letter) -> Self {
        Self {
            store: Mutex::new(Store {
                questions: Vec::new(),
                next_id: 1,
            }),
            answer,
            create_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            report_calls: AtomicUsize::new(0),
            fail_create: Mutex::new(None),
            fail_list: Mutex::new(None),
            fail_delete: Mutex::new(None),
            fail_report: Mutex::new(None),
            yield_on_create: false,
        }
    }

    pub fn with_yield_on_create(mut self) -> Self {
        self.yield_on_create = true;
        self
    }

    /// 预置一道题，返回分配的ID
    pub fn seed(&self, question: &str, choices: [&str; 4], answer: Letter) -> i64 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id;
        store.next_id += 1;
        store.questions.push(Question {
            id,
            question: question.to_string(),
            choices: choices.map(str::to_string),
            answer,
            explanation: format!("Seeded answer {}", answer),
            user_correction: None,
        });
        id
    }

    pub fn fail_create_with(&self, failure: Option<Failure>) {
        *self.fail_create.lock().unwrap() = failure;
    }

    pub fn fail_list_with(&self, failure: Option<Failure>) {
        *self.fail_list.lock().unwrap() = failure;
    }

    pub fn fail_delete_with(&self, failure: Option<Failure>) {
        *self.fail_delete.lock().unwrap() = failure;
    }

    pub fn fail_report_with(&self, failure: Option<Failure>) {
        *self.fail_report.lock().unwrap() = failure;
    }

    pub fn creates(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn lists(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn reports(&self) -> usize {
        self.report_calls.load(Ordering::SeqCst)
    }

    pub fn total_requests(&self) -> usize {
        self.creates() + self.lists() + self.deletes() + self.reports()
    }

    pub fn stored(&self, id: i64) -> Option<Question> {
        self.store
            .lock()
            .unwrap()
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    fn injected(slot: &Mutex<Option<Failure>>) -> Option<Failure> {
        slot.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionApi for FakeBackend {
    async fn create_question(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.yield_on_create {
            tokio::task::yield_now().await;
        }
        if let Some(failure) = Self::injected(&self.fail_create) {
            return Err(failure.into_error("upload"));
        }

        let mut store = self.store.lock().unwrap();
        let id = store.next_id;
        store.next_id += 1;
        let explanation = format!("{} is correct.", request.choices[self.answer.index()]);
        store.questions.push(Question {
            id,
            question: request.question.clone(),
            choices: request.choices.clone(),
            answer: self.answer,
            explanation: explanation.clone(),
            user_correction: None,
        });

        Ok(UploadResponse {
            message: "Question saved successfully".to_string(),
            result: AnswerResult {
                answer: self.answer.to_string(),
                explanation,
                source: "fake".to_string(),
                fact_checked: None,
            },
            question_id: id,
        })
    }

    async fn list_questions(&self) -> Result<Vec<Question>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = Self::injected(&self.fail_list) {
            return Err(failure.into_error("questions"));
        }
        // 与后端一致：按 ID 倒序
        let mut questions = self.store.lock().unwrap().questions.clone();
        questions.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(questions)
    }

    async fn get_question(&self, id: i64) -> Result<Question, ApiError> {
        self.stored(id).ok_or_else(|| {
            ApiError::bad_response(format!("questions/{}", id), 404, Some("Not Found".to_string()))
        })
    }

    async fn delete_question(&self, id: i64) -> Result<(), ApiError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let endpoint = format!("questions/{}", id);
        if let Some(failure) = Self::injected(&self.fail_delete) {
            return Err(failure.into_error(&endpoint));
        }
        let mut store = self.store.lock().unwrap();
        let before = store.questions.len();
        store.questions.retain(|q| q.id != id);
        if store.questions.len() == before {
            return Err(ApiError::bad_response(endpoint, 404, None));
        }
        Ok(())
    }

    async fn report_correction(&self, id: i64, correction: Letter) -> Result<(), ApiError> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);
        let endpoint = format!("questions/{}/report", id);
        if let Some(failure) = Self::injected(&self.fail_report) {
            return Err(failure.into_error(&endpoint));
        }
        let mut store = self.store.lock().unwrap();
        match store.questions.iter_mut().find(|q| q.id == id) {
            Some(question) => {
                question.user_correction = Some(correction);
                Ok(())
            }
            None => Err(ApiError::bad_response(
                endpoint,
                404,
                Some("Question not found".to_string()),
            )),
        }
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            message: "Question Answer API is running".to_string(),
            version: "1.0.0".to_string(),
        })
    }
}

/// 组装好的组件
pub struct Harness {
    pub backend: Arc<FakeBackend>,
    pub notices: Arc<NoticeBoard>,
    pub list: Arc<QuestionListManager>,
    pub submission: SubmissionController,
}

pub fn harness(backend: FakeBackend) -> Harness {
    let backend = Arc::new(backend);
    let api: Arc<dyn QuestionApi> = backend.clone();
    let notices = Arc::new(NoticeBoard::new());
    let list = Arc::new(QuestionListManager::new(api.clone(), notices.clone()));
    let submission = SubmissionController::new(api, list.clone(), notices.clone());

    Harness {
        backend,
        notices,
        list,
        submission,
    }
}

/// 填写完整的表单
pub fn fill_draft(submission: &SubmissionController, question: &str, choices: [&str; 4]) {
    submission.set_question(question);
    for (letter, text) in Letter::ALL.into_iter().zip(choices) {
        submission.set_choice(letter, text);
    }
}
