//! Request/response envelopes for the `/messages` endpoint

use serde::{Deserialize, Serialize};

use super::{message::Message, task::Task};

/// Parameters of a send-message request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageSendParams {
    /// The message to deliver to the agent
    pub message: Message,
}

/// Envelope posted to an agent's `/messages` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendMessageRequest {
    /// Request identifier, echoed back in the response
    pub id: String,

    /// Request parameters
    pub params: MessageSendParams,
}

impl SendMessageRequest {
    /// Wrap a message in a request envelope, correlating the envelope by
    /// the message's own id
    pub fn new(message: Message) -> Self {
        Self {
            id: message.message_id.clone(),
            params: MessageSendParams { message },
        }
    }

    /// The wrapped message
    pub fn message(&self) -> &Message {
        &self.params.message
    }
}

/// Successful result of a send-message call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendMessageSuccessResponse {
    /// Echo of the request id
    pub id: String,

    /// The task reflecting the outcome of the call
    pub result: Task,
}

/// Envelope returned from an agent's `/messages` endpoint
///
/// Failures after the agent has accepted the message are encoded in the
/// wrapped task's status, not as a distinct error envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendMessageResponse {
    /// The response payload
    pub root: SendMessageSuccessResponse,
}

impl SendMessageResponse {
    /// Build a response echoing `request_id` and carrying `task`
    pub fn reply(request_id: impl Into<String>, task: Task) -> Self {
        Self {
            root: SendMessageSuccessResponse {
                id: request_id.into(),
                result: task,
            },
        }
    }

    /// The task carried in the response
    pub fn task(&self) -> &Task {
        &self.root.result
    }

    /// Consume the envelope, yielding the task
    pub fn into_task(self) -> Task {
        self.root.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope_shape() {
        let request = SendMessageRequest::new(Message::user("hello"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["id"], json["params"]["message"]["messageId"]);
        assert_eq!(json["params"]["message"]["role"], "user");
    }

    #[test]
    fn test_response_echoes_request_id() {
        let task = Task::working("task-1", "ctx-1");
        let response = SendMessageResponse::reply("req-42", task);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["root"]["id"], "req-42");
        assert_eq!(json["root"]["result"]["id"], "task-1");
    }

    #[test]
    fn test_envelope_round_trip() {
        let mut task = Task::working("task-1", "ctx-1");
        task.mark_completed(Some("done".to_string()));
        let response = SendMessageResponse::reply("req-1", task);

        let json = serde_json::to_string(&response).unwrap();
        let deserialized: SendMessageResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(response, deserialized);
        assert_eq!(deserialized.task().response_text(), Some("done"));
    }
}
