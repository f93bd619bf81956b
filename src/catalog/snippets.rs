//! Source snippets for each operation in four languages
//!
//! The snippet text is opaque to the engine: the UI looks it up by
//! operation and language, shows it, and can export it to a file.

use super::OperationKind;
use crate::engine::errors::SimError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Cpp,
    Python,
    Java,
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Cpp,
        Language::Python,
        Language::Java,
        Language::JavaScript,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::JavaScript => "JavaScript",
        }
    }

    /// File extension used when exporting, dot included
    pub fn extension(self) -> &'static str {
        match self {
            Language::Cpp => ".cpp",
            Language::Python => ".py",
            Language::Java => ".java",
            Language::JavaScript => ".js",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c++" | "cpp" => Ok(Language::Cpp),
            "python" | "py" => Ok(Language::Python),
            "java" => Ok(Language::Java),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(SimError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Lookup of snippet text
pub trait SnippetBank {
    fn snippet(&self, kind: OperationKind, language: Language) -> Option<&str>;
}

/// File name an exported snippet gets, e.g. `DLL_InsertatHead.cpp`
pub fn export_file_name(kind: OperationKind, language: Language) -> String {
    let title: String = kind.title().split_whitespace().collect();
    format!("DLL_{}{}", title, language.extension())
}

/// Write the snippet for `kind` in `language` into `dir`
pub fn export_snippet<B: SnippetBank + ?Sized>(
    bank: &B,
    kind: OperationKind,
    language: Language,
    dir: &Path,
) -> Result<PathBuf, SimError> {
    let text = bank
        .snippet(kind, language)
        .ok_or(SimError::MissingSnippet {
            operation: kind.title(),
            language: language.name(),
        })?;
    let path = dir.join(export_file_name(kind, language));
    fs::write(&path, text).map_err(|source| SimError::Export {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "exported snippet");
    Ok(path)
}

/// Snippets compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSnippets;

impl SnippetBank for BuiltinSnippets {
    fn snippet(&self, kind: OperationKind, language: Language) -> Option<&str> {
        let text = match (kind, language) {
            (OperationKind::InsertHead, Language::Cpp) => INSERT_HEAD_CPP,
            (OperationKind::InsertHead, Language::Python) => INSERT_HEAD_PY,
            (OperationKind::InsertHead, Language::Java) => INSERT_HEAD_JAVA,
            (OperationKind::InsertHead, Language::JavaScript) => INSERT_HEAD_JS,
            (OperationKind::InsertTail, Language::Cpp) => INSERT_TAIL_CPP,
            (OperationKind::InsertTail, Language::Python) => INSERT_TAIL_PY,
            (OperationKind::InsertTail, Language::Java) => INSERT_TAIL_JAVA,
            (OperationKind::InsertTail, Language::JavaScript) => INSERT_TAIL_JS,
            (OperationKind::InsertPosition, Language::Cpp) => INSERT_POS_CPP,
            (OperationKind::InsertPosition, Language::Python) => INSERT_POS_PY,
            (OperationKind::InsertPosition, Language::Java) => INSERT_POS_JAVA,
            (OperationKind::InsertPosition, Language::JavaScript) => INSERT_POS_JS,
            (OperationKind::DeleteHead, Language::Cpp) => DELETE_HEAD_CPP,
            (OperationKind::DeleteHead, Language::Python) => DELETE_HEAD_PY,
            (OperationKind::DeleteHead, Language::Java) => DELETE_HEAD_JAVA,
            (OperationKind::DeleteHead, Language::JavaScript) => DELETE_HEAD_JS,
            (OperationKind::DeleteTail, Language::Cpp) => DELETE_TAIL_CPP,
            (OperationKind::DeleteTail, Language::Python) => DELETE_TAIL_PY,
            (OperationKind::DeleteTail, Language::Java) => DELETE_TAIL_JAVA,
            (OperationKind::DeleteTail, Language::JavaScript) => DELETE_TAIL_JS,
            (OperationKind::DeleteByValue, Language::Cpp) => DELETE_VALUE_CPP,
            (OperationKind::DeleteByValue, Language::Python) => DELETE_VALUE_PY,
            (OperationKind::DeleteByValue, Language::Java) => DELETE_VALUE_JAVA,
            (OperationKind::DeleteByValue, Language::JavaScript) => DELETE_VALUE_JS,
        };
        Some(text)
    }
}

const INSERT_HEAD_CPP: &str = r#"Node* insertAtHead(Node* head, int val) {
    Node* newNode = new Node(val);
    newNode->next = head;            // new->next points to old head
    if (head) head->prev = newNode;  // old head's prev points back
    return newNode;                  // new node is now the head
}"#;

const INSERT_HEAD_PY: &str = r#"def insert_at_head(head, val):
    new_node = Node(val)
    new_node.next = head       # new->next points to old head
    if head:
        head.prev = new_node   # old head's prev points back
    return new_node            # new node is now the head"#;

const INSERT_HEAD_JAVA: &str = r#"static Node insertAtHead(Node head, int val) {
    Node newNode = new Node(val);
    newNode.next = head;             // new->next points to old head
    if (head != null) head.prev = newNode;
    return newNode;                  // new node is now the head
}"#;

const INSERT_HEAD_JS: &str = r#"function insertAtHead(head, val) {
  const newNode = new Node(val);
  newNode.next = head;             // new->next points to old head
  if (head) head.prev = newNode;   // old head's prev points back
  return newNode;                  // new node is now the head
}"#;

const INSERT_TAIL_CPP: &str = r#"Node* insertAtTail(Node* head, int val) {
    Node* newNode = new Node(val);
    if (!head) return newNode;       // empty list: new node is the head
    Node* curr = head;
    while (curr->next) curr = curr->next;
    curr->next = newNode;            // tail->next = new
    newNode->prev = curr;            // new->prev = tail
    return head;
}"#;

const INSERT_TAIL_PY: &str = r#"def insert_at_tail(head, val):
    new_node = Node(val)
    if not head:
        return new_node            # empty list: new node is the head
    curr = head
    while curr.next:
        curr = curr.next
    curr.next = new_node           # tail->next = new
    new_node.prev = curr           # new->prev = tail
    return head"#;

const INSERT_TAIL_JAVA: &str = r#"static Node insertAtTail(Node head, int val) {
    Node newNode = new Node(val);
    if (head == null) return newNode;
    Node curr = head;
    while (curr.next != null) curr = curr.next;
    curr.next = newNode;             // tail->next = new
    newNode.prev = curr;             // new->prev = tail
    return head;
}"#;

const INSERT_TAIL_JS: &str = r#"function insertAtTail(head, val) {
  const newNode = new Node(val);
  if (!head) return newNode;       // empty list: new node is the head
  let curr = head;
  while (curr.next) curr = curr.next;
  curr.next = newNode;             // tail->next = new
  newNode.prev = curr;             // new->prev = tail
  return head;
}"#;

const INSERT_POS_CPP: &str = r#"Node* insertAtPosition(Node* head, int val, int pos) {
    if (pos == 0) return insertAtHead(head, val);
    Node* curr = head;
    for (int i = 0; i < pos - 1 && curr; i++) curr = curr->next;
    if (!curr) return head;          // position out of bounds
    Node* newNode = new Node(val);
    newNode->next = curr->next;      // new->next = next
    newNode->prev = curr;            // new->prev = prev
    if (curr->next) curr->next->prev = newNode;
    curr->next = newNode;            // prev->next = new
    return head;
}"#;

const INSERT_POS_PY: &str = r#"def insert_at_position(head, val, pos):
    if pos == 0:
        return insert_at_head(head, val)
    curr = head
    for _ in range(pos - 1):
        if not curr:
            break
        curr = curr.next
    if not curr:
        return head                # position out of bounds
    new_node = Node(val)
    new_node.next = curr.next
    new_node.prev = curr
    if curr.next:
        curr.next.prev = new_node
    curr.next = new_node
    return head"#;

const INSERT_POS_JAVA: &str = r#"static Node insertAtPosition(Node head, int val, int pos) {
    if (pos == 0) return insertAtHead(head, val);
    Node curr = head;
    for (int i = 0; i < pos - 1 && curr != null; i++) curr = curr.next;
    if (curr == null) return head;   // position out of bounds
    Node newNode = new Node(val);
    newNode.next = curr.next;
    newNode.prev = curr;
    if (curr.next != null) curr.next.prev = newNode;
    curr.next = newNode;
    return head;
}"#;

const INSERT_POS_JS: &str = r#"function insertAtPosition(head, val, pos) {
  if (pos === 0) return insertAtHead(head, val);
  let curr = head;
  for (let i = 0; i < pos - 1 && curr; i++) curr = curr.next;
  if (!curr) return head;          // position out of bounds
  const newNode = new Node(val);
  newNode.next = curr.next;
  newNode.prev = curr;
  if (curr.next) curr.next.prev = newNode;
  curr.next = newNode;
  return head;
}"#;

const DELETE_HEAD_CPP: &str = r#"Node* deleteFromHead(Node* head) {
    if (!head) return nullptr;
    Node* newHead = head->next;
    if (newHead) newHead->prev = nullptr;  // clear dangling prev
    delete head;
    return newHead;
}"#;

const DELETE_HEAD_PY: &str = r#"def delete_from_head(head):
    if not head:
        return None
    new_head = head.next
    if new_head:
        new_head.prev = None   # clear dangling prev
    return new_head"#;

const DELETE_HEAD_JAVA: &str = r#"static Node deleteFromHead(Node head) {
    if (head == null) return null;
    Node newHead = head.next;
    if (newHead != null) newHead.prev = null;  // clear dangling prev
    return newHead;
}"#;

const DELETE_HEAD_JS: &str = r#"function deleteFromHead(head) {
  if (!head) return null;
  const newHead = head.next;
  if (newHead) newHead.prev = null;  // clear dangling prev
  return newHead;
}"#;

const DELETE_TAIL_CPP: &str = r#"Node* deleteFromTail(Node* head) {
    if (!head) return nullptr;
    if (!head->next) { delete head; return nullptr; }
    Node* curr = head;
    while (curr->next) curr = curr->next;
    curr->prev->next = nullptr;      // second-to-last becomes the tail
    delete curr;
    return head;
}"#;

const DELETE_TAIL_PY: &str = r#"def delete_from_tail(head):
    if not head or not head.next:
        return None
    curr = head
    while curr.next:
        curr = curr.next
    curr.prev.next = None      # second-to-last becomes the tail
    return head"#;

const DELETE_TAIL_JAVA: &str = r#"static Node deleteFromTail(Node head) {
    if (head == null || head.next == null) return null;
    Node curr = head;
    while (curr.next != null) curr = curr.next;
    curr.prev.next = null;           // second-to-last becomes the tail
    return head;
}"#;

const DELETE_TAIL_JS: &str = r#"function deleteFromTail(head) {
  if (!head || !head.next) return null;
  let curr = head;
  while (curr.next) curr = curr.next;
  curr.prev.next = null;           // second-to-last becomes the tail
  return head;
}"#;

const DELETE_VALUE_CPP: &str = r#"Node* deleteByValue(Node* head, int target) {
    Node* curr = head;
    while (curr && curr->data != target) curr = curr->next;
    if (!curr) return head;          // not found
    if (curr->prev) curr->prev->next = curr->next;
    else head = curr->next;
    if (curr->next) curr->next->prev = curr->prev;
    delete curr;
    return head;
}"#;

const DELETE_VALUE_PY: &str = r#"def delete_by_value(head, target):
    curr = head
    while curr and curr.data != target:
        curr = curr.next
    if not curr:
        return head            # not found
    if curr.prev:
        curr.prev.next = curr.next
    else:
        head = curr.next
    if curr.next:
        curr.next.prev = curr.prev
    return head"#;

const DELETE_VALUE_JAVA: &str = r#"static Node deleteByValue(Node head, int target) {
    Node curr = head;
    while (curr != null && curr.data != target) curr = curr.next;
    if (curr == null) return head;   // not found
    if (curr.prev != null) curr.prev.next = curr.next;
    else head = curr.next;
    if (curr.next != null) curr.next.prev = curr.prev;
    return head;
}"#;

const DELETE_VALUE_JS: &str = r#"function deleteByValue(head, target) {
  let curr = head;
  while (curr && curr.data !== target) curr = curr.next;
  if (!curr) return head;          // not found
  if (curr.prev) curr.prev.next = curr.next;
  else head = curr.next;
  if (curr.next) curr.next.prev = curr.prev;
  return head;
}"#;
