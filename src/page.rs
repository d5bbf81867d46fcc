use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    pub fn id(value: &str) -> Self {
        Selector::Id(value.to_string())
    }

    pub fn class(value: &str) -> Self {
        Selector::Class(value.to_string())
    }

    fn matches(&self, node: &Node) -> bool {
        match self {
            Selector::Id(id) => node.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => node.classes.iter().any(|c| c == class),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Class(class) => write!(f, ".{class}"),
        }
    }
}

#[derive(Debug)]
pub enum WaitError {
    NotFound { selector: Selector, waited: Duration },
    Cancelled,
}

impl fmt::Display for WaitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitError::NotFound { selector, waited } => write!(
                f,
                "element {selector} not found within {}ms",
                waited.as_millis()
            ),
            WaitError::Cancelled => write!(f, "element wait cancelled"),
        }
    }
}

impl Error for WaitError {}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    text: String,
    html: String,
    scroll_x: f32,
    selected: Option<usize>,
    parent: Option<usize>,
    children: Vec<usize>,
}

enum WaitState {
    Pending,
    Found(usize),
    Cancelled,
}

struct WaitCell {
    state: Mutex<WaitState>,
    cv: Condvar,
}

impl WaitCell {
    fn new() -> Self {
        Self {
            state: Mutex::new(WaitState::Pending),
            cv: Condvar::new(),
        }
    }

    fn fulfill(&self, idx: usize) {
        let mut state = self.state.lock().expect("wait cell lock poisoned");
        if matches!(*state, WaitState::Pending) {
            *state = WaitState::Found(idx);
            self.cv.notify_all();
        }
    }

    fn cancel(&self) {
        let mut state = self.state.lock().expect("wait cell lock poisoned");
        if matches!(*state, WaitState::Pending) {
            *state = WaitState::Cancelled;
            self.cv.notify_all();
        }
    }
}

struct Watcher {
    selector: Selector,
    cell: Arc<WaitCell>,
}

type ClickHandler = Arc<dyn Fn() + Send + Sync>;
type ChangeHandler = Arc<dyn Fn(usize) + Send + Sync>;

struct PageInner {
    ready: ReadyState,
    nodes: Vec<Node>,
    logs: VecDeque<String>,
    watchers: Vec<Watcher>,
    click_handlers: Vec<(String, ClickHandler)>,
    change_handlers: Vec<(String, ChangeHandler)>,
}

struct PageShared {
    inner: Mutex<PageInner>,
    ready_cv: Condvar,
}

/// Model of the host document. Clones share the same page.
#[derive(Clone)]
pub struct Page {
    shared: Arc<PageShared>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        let body = Node {
            tag: "body".to_string(),
            ..Node::default()
        };
        Self {
            shared: Arc::new(PageShared {
                inner: Mutex::new(PageInner {
                    ready: ReadyState::Loading,
                    nodes: vec![body],
                    logs: VecDeque::with_capacity(MAX_LOGS),
                    watchers: Vec::new(),
                    click_handlers: Vec::new(),
                    change_handlers: Vec::new(),
                }),
                ready_cv: Condvar::new(),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageInner> {
        self.shared.inner.lock().expect("page lock poisoned")
    }

    pub fn body(&self) -> ElementHandle {
        ElementHandle {
            page: self.clone(),
            idx: 0,
        }
    }

    pub fn mount(&self, tag: &str, id: &str) -> ElementHandle {
        self.insert(0, tag, Some(id), &[])
    }

    pub fn mount_classed(&self, tag: &str, classes: &[&str]) -> ElementHandle {
        self.insert(0, tag, None, classes)
    }

    pub fn mount_child(&self, parent: &ElementHandle, tag: &str, id: Option<&str>) -> ElementHandle {
        self.insert(parent.idx, tag, id, &[])
    }

    fn insert(&self, parent: usize, tag: &str, id: Option<&str>, classes: &[&str]) -> ElementHandle {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let idx = inner.nodes.len();
        inner.nodes.push(Node {
            tag: tag.to_string(),
            id: id.map(|v| v.to_string()),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            parent: Some(parent),
            ..Node::default()
        });
        inner.nodes[parent].children.push(idx);

        // One-shot waiters matched by this insertion are fulfilled and
        // deregistered in the same step, under the page lock, so a timing
        // out waiter always observes either the watcher or the result.
        let node = &inner.nodes[idx];
        let watchers = std::mem::take(&mut inner.watchers);
        for watcher in watchers {
            if watcher.selector.matches(node) {
                watcher.cell.fulfill(idx);
            } else {
                inner.watchers.push(watcher);
            }
        }
        drop(guard);

        ElementHandle {
            page: self.clone(),
            idx,
        }
    }

    pub fn set_ready(&self, ready: ReadyState) {
        {
            let mut inner = self.lock();
            if ready > inner.ready {
                inner.ready = ready;
            }
        }
        self.shared.ready_cv.notify_all();
    }

    pub fn ready_state(&self) -> ReadyState {
        self.lock().ready
    }

    /// Blocks until the document is at least interactive. Resolves
    /// immediately when the page is already past that point.
    pub fn wait_ready(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut inner = self.lock();
        while inner.ready < ReadyState::Interactive {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = self
                .shared
                .ready_cv
                .wait_timeout(inner, deadline - now)
                .expect("page lock poisoned");
            inner = guard;
        }
        true
    }

    pub fn find(&self, selector: &Selector) -> Option<ElementHandle> {
        let inner = self.lock();
        let idx = inner
            .nodes
            .iter()
            .position(|node| selector.matches(node))?;
        Some(ElementHandle {
            page: self.clone(),
            idx,
        })
    }

    pub fn find_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.find(&Selector::id(id))
    }

    /// Begins a one-shot wait for `selector`. When the element already
    /// exists the wait resolves without registering a watcher.
    pub fn watch(&self, selector: Selector) -> ElementWait {
        let mut inner = self.lock();
        if let Some(idx) = inner
            .nodes
            .iter()
            .position(|node| selector.matches(node))
        {
            return ElementWait {
                page: self.clone(),
                selector,
                backing: WaitBacking::Immediate(idx),
            };
        }
        let cell = Arc::new(WaitCell::new());
        inner.watchers.push(Watcher {
            selector: selector.clone(),
            cell: cell.clone(),
        });
        ElementWait {
            page: self.clone(),
            selector,
            backing: WaitBacking::Registered(cell),
        }
    }

    pub fn wait_for(&self, id: &str, timeout: Duration) -> Result<ElementHandle, WaitError> {
        self.watch(Selector::id(id)).wait(timeout)
    }

    pub fn pending_watchers(&self) -> usize {
        self.lock().watchers.len()
    }

    fn deregister(&self, cell: &Arc<WaitCell>) {
        let mut inner = self.lock();
        inner.watchers.retain(|w| !Arc::ptr_eq(&w.cell, cell));
    }

    pub fn push_log(&self, msg: impl Into<String>) {
        let mut inner = self.lock();
        inner.logs.push_back(msg.into());
        while inner.logs.len() > MAX_LOGS {
            inner.logs.pop_front();
        }
    }

    pub fn logs(&self) -> Vec<String> {
        self.lock().logs.iter().cloned().collect()
    }

    pub fn on_click(&self, id: &str, handler: impl Fn() + Send + Sync + 'static) {
        self.lock()
            .click_handlers
            .push((id.to_string(), Arc::new(handler)));
    }

    /// Replaces any change handler already bound to `id` (assignment
    /// semantics, like `onchange =`).
    pub fn set_change_handler(&self, id: &str, handler: impl Fn(usize) + Send + Sync + 'static) {
        let mut inner = self.lock();
        inner.change_handlers.retain(|(target, _)| target != id);
        inner
            .change_handlers
            .push((id.to_string(), Arc::new(handler)));
    }

    pub fn click(&self, id: &str) {
        // Handlers run outside the page lock so they can mutate the page.
        let handlers: Vec<ClickHandler> = {
            let inner = self.lock();
            inner
                .click_handlers
                .iter()
                .filter(|(target, _)| target == id)
                .map(|(_, handler)| handler.clone())
                .collect()
        };
        for handler in handlers {
            handler();
        }
    }

    pub fn select_option(&self, id: &str, option: usize) {
        let handlers: Vec<ChangeHandler> = {
            let mut inner = self.lock();
            if let Some(node) = inner
                .nodes
                .iter_mut()
                .find(|node| node.id.as_deref() == Some(id))
            {
                node.selected = Some(option);
            }
            inner
                .change_handlers
                .iter()
                .filter(|(target, _)| target == id)
                .map(|(_, handler)| handler.clone())
                .collect()
        };
        for handler in handlers {
            handler(option);
        }
    }

    /// Serializes the document for inspection (demo binary, debugging).
    pub fn render_html(&self) -> String {
        let inner = self.lock();
        let mut out = String::new();
        render_node(&inner.nodes, 0, 0, &mut out);
        out
    }
}

fn render_node(nodes: &[Node], idx: usize, depth: usize, out: &mut String) {
    let node = &nodes[idx];
    let pad = "  ".repeat(depth);
    out.push_str(&pad);
    out.push('<');
    out.push_str(&node.tag);
    if let Some(id) = &node.id {
        out.push_str(&format!(" id=\"{id}\""));
    }
    if !node.classes.is_empty() {
        out.push_str(&format!(" class=\"{}\"", node.classes.join(" ")));
    }
    if !node.styles.is_empty() {
        let style = node
            .styles
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        out.push_str(&format!(" style=\"{style}\""));
    }
    out.push_str(">\n");
    if !node.text.is_empty() {
        out.push_str(&pad);
        out.push_str("  ");
        out.push_str(&node.text);
        out.push('\n');
    }
    if !node.html.is_empty() {
        for line in node.html.lines() {
            out.push_str(&pad);
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    for child in &node.children {
        render_node(nodes, *child, depth + 1, out);
    }
    out.push_str(&pad);
    out.push_str(&format!("</{}>\n", node.tag));
}

enum WaitBacking {
    Immediate(usize),
    Registered(Arc<WaitCell>),
}

/// One-shot element wait. Obtain a [`WaitCanceller`] before calling
/// [`ElementWait::wait`] to be able to abort it from another thread.
pub struct ElementWait {
    page: Page,
    selector: Selector,
    backing: WaitBacking,
}

impl ElementWait {
    pub fn canceller(&self) -> WaitCanceller {
        let cell = match &self.backing {
            WaitBacking::Immediate(_) => None,
            WaitBacking::Registered(cell) => Some(cell.clone()),
        };
        WaitCanceller {
            page: self.page.clone(),
            cell,
        }
    }

    pub fn wait(self, timeout: Duration) -> Result<ElementHandle, WaitError> {
        let cell = match self.backing {
            WaitBacking::Immediate(idx) => {
                return Ok(ElementHandle {
                    page: self.page,
                    idx,
                });
            }
            WaitBacking::Registered(cell) => cell,
        };

        let deadline = Instant::now() + timeout;
        let mut state = cell.state.lock().expect("wait cell lock poisoned");
        loop {
            match *state {
                WaitState::Found(idx) => {
                    return Ok(ElementHandle {
                        page: self.page,
                        idx,
                    });
                }
                WaitState::Cancelled => return Err(WaitError::Cancelled),
                WaitState::Pending => {}
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            let (guard, _) = cell
                .cv
                .wait_timeout(state, deadline - now)
                .expect("wait cell lock poisoned");
            state = guard;
        }
        drop(state);

        // Deregister first, then settle: a fulfillment that raced the
        // timeout still wins because fulfillers hold the page lock.
        self.page.deregister(&cell);
        match *cell.state.lock().expect("wait cell lock poisoned") {
            WaitState::Found(idx) => Ok(ElementHandle {
                page: self.page,
                idx,
            }),
            WaitState::Cancelled => Err(WaitError::Cancelled),
            WaitState::Pending => Err(WaitError::NotFound {
                selector: self.selector,
                waited: timeout,
            }),
        }
    }
}

pub struct WaitCanceller {
    page: Page,
    cell: Option<Arc<WaitCell>>,
}

impl WaitCanceller {
    /// Aborts the wait and deregisters its watcher. No-op when the wait
    /// already resolved.
    pub fn cancel(&self) {
        if let Some(cell) = &self.cell {
            self.page.deregister(cell);
            cell.cancel();
        }
    }
}

/// Handle to one element of a [`Page`]. Mutations go through the page lock.
#[derive(Clone)]
pub struct ElementHandle {
    page: Page,
    idx: usize,
}

impl std::fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementHandle")
            .field("idx", &self.idx)
            .finish_non_exhaustive()
    }
}

impl ElementHandle {
    fn with_node<T>(&self, f: impl FnOnce(&Node) -> T) -> T {
        let inner = self.page.lock();
        f(&inner.nodes[self.idx])
    }

    fn with_node_mut<T>(&self, f: impl FnOnce(&mut Node) -> T) -> T {
        let mut inner = self.page.lock();
        f(&mut inner.nodes[self.idx])
    }

    pub fn id(&self) -> Option<String> {
        self.with_node(|node| node.id.clone())
    }

    pub fn tag(&self) -> String {
        self.with_node(|node| node.tag.clone())
    }

    pub fn set_html(&self, html: &str) {
        self.with_node_mut(|node| node.html = html.to_string());
    }

    pub fn append_html(&self, fragment: &str) {
        self.with_node_mut(|node| node.html.push_str(fragment));
    }

    pub fn prepend_html(&self, fragment: &str) {
        self.with_node_mut(|node| node.html.insert_str(0, fragment));
    }

    pub fn html(&self) -> String {
        self.with_node(|node| node.html.clone())
    }

    pub fn set_text(&self, text: &str) {
        self.with_node_mut(|node| node.text = text.to_string());
    }

    pub fn text(&self) -> String {
        self.with_node(|node| node.text.clone())
    }

    pub fn add_class(&self, class: &str) {
        self.with_node_mut(|node| {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        });
    }

    pub fn remove_class(&self, class: &str) {
        self.with_node_mut(|node| node.classes.retain(|c| c != class));
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.with_node(|node| node.classes.iter().any(|c| c == class))
    }

    pub fn set_style(&self, name: &str, value: &str) {
        self.with_node_mut(|node| {
            if let Some(entry) = node.styles.iter_mut().find(|(n, _)| n == name) {
                entry.1 = value.to_string();
            } else {
                node.styles.push((name.to_string(), value.to_string()));
            }
        });
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.with_node(|node| {
            node.styles
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, value)| value.clone())
        })
    }

    pub fn scroll_x(&self) -> f32 {
        self.with_node(|node| node.scroll_x)
    }

    pub fn set_scroll_x(&self, value: f32) {
        self.with_node_mut(|node| node.scroll_x = value.max(0.0));
    }

    pub fn selected(&self) -> Option<usize> {
        self.with_node(|node| node.selected)
    }

    pub fn parent(&self) -> Option<ElementHandle> {
        self.with_node(|node| node.parent).map(|idx| ElementHandle {
            page: self.page.clone(),
            idx,
        })
    }

    /// Reparents `child` under this element, detaching it from its
    /// current parent.
    pub fn append_child(&self, child: &ElementHandle) {
        let mut inner = self.page.lock();
        let old_parent = inner.nodes[child.idx].parent;
        if let Some(old) = old_parent {
            let children = &mut inner.nodes[old].children;
            children.retain(|&idx| idx != child.idx);
        }
        inner.nodes[child.idx].parent = Some(self.idx);
        inner.nodes[self.idx].children.push(child.idx);
    }
}
