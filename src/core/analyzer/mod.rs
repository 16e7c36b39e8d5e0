//! Single-pass, scope-aware key extraction over one parsed file.
//!
//! The analyzer walks the AST depth-first in document order. Scope-introducing
//! nodes push and pop scopes on the [`ScopeTracker`]; at every other node it
//! first asks the enabled adapters whether the node declares a translation
//! binding and otherwise whether it is a key usage.

use swc_common::{SourceMap, Span};
use swc_ecma_ast::{
    ArrowExpr, AssignExpr, AssignTarget, BlockStmt, BlockStmtOrExpr, CallExpr, CatchClause,
    ClassDecl, Constructor, FnDecl, ForInStmt, ForOfStmt, ForStmt, Function, ImportDecl,
    ImportSpecifier, JSXElement, Module, ParamOrTsParamProp, Pat, SimpleAssignTarget, SwitchStmt,
    VarDecl, VarDeclKind,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::{
    KeyOccurrence, SourceContext, SourceLocation,
    adapters::{
        Adapter, BindingTarget, CallSite, DeclarationSite, LibraryAdapter, helpers::binding_names,
    },
    extract::extract_key,
    resolve::BindingResolver,
    scope::{ScopeEntry, ScopeTracker},
};


/// Extracts [`KeyOccurrence`]s from a module.
///
/// # Usage
///
/// ```ignore
/// let parsed = parse_source(code, "src/app.jsx", Arc::new(SourceMap::default()))?;
/// let adapters = adapters_for(&LibraryKind::ALL);
/// let occurrences = FileAnalyzer::new("src/app.jsx", &parsed.source_map, &adapters)
///     .analyze(&parsed.module);
/// ```
pub struct FileAnalyzer<'a> {
    /// Path to the file being analyzed (as reported in locations).
    file_path: &'a str,

    /// SWC source map for looking up line/column positions.
    source_map: &'a SourceMap,

    /// Enabled adapters, in priority order.
    adapters: &'a [Adapter],

    scopes: ScopeTracker,
    resolver: BindingResolver,

    /// Occurrences collected during traversal, in document order.
    occurrences: Vec<KeyOccurrence>,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, adapters: &'a [Adapter]) -> Self {
        Self {
            file_path,
            source_map,
            adapters,
            scopes: ScopeTracker::new(),
            resolver: BindingResolver::new(),
            occurrences: Vec::new(),
        }
    }

    /// Main entry point: analyze a module and return its key occurrences.
    pub fn analyze(mut self, module: &Module) -> Vec<KeyOccurrence> {
        self.visit_module(module);
        self.occurrences
    }

    fn location(&self, span: Span) -> SourceLocation {
        let loc = self.source_map.lookup_char_pos(span.lo);
        SourceLocation::new(self.file_path, loc.line, loc.col_display + 1)
    }

    fn source_context(&self, span: Span) -> SourceContext {
        let loc = self.source_map.lookup_char_pos(span.lo);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();
        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }

    /// Try every enabled adapter on a declaration site. The first match is
    /// registered and its local name returned.
    fn register_declaration(&mut self, site: DeclarationSite) -> Option<String> {
        self.register(site, false)
    }

    /// Like [`Self::register_declaration`]; a `hoisted` binding (`var`) goes
    /// to the nearest function scope instead of the current block.
    fn register(&mut self, site: DeclarationSite, hoisted: bool) -> Option<String> {
        let mut spec = self
            .adapters
            .iter()
            .find_map(|adapter| adapter.match_binding_declaration(&site))?;
        if hoisted && spec.target == BindingTarget::Scope {
            spec.target = BindingTarget::FunctionScope;
        }
        let local_name = spec.local_name.clone();
        let location = self.location(spec.span);
        self.resolver.register(spec, location, &mut self.scopes);
        Some(local_name)
    }

    /// Try every enabled adapter on a call site and record the first match.
    fn record_call(&mut self, site: CallSite) {
        let Some(spec) = self
            .adapters
            .iter()
            .find_map(|adapter| adapter.match_key_call(&site, &self.scopes))
        else {
            return;
        };
        let context = self.source_context(spec.span);
        let occurrence = extract_key(spec, &self.scopes, context);
        log::debug!(
            "{}:{} {} -> {:?} ({})",
            occurrence.file_path(),
            occurrence.line(),
            occurrence.callee,
            occurrence.effective_key,
            occurrence.status
        );
        self.occurrences.push(occurrence);
    }

    /// Hide outer translation bindings behind plain locals named in `pats`,
    /// except `keep` (a name just declared as a binding).
    fn shadow_names<'p>(
        &mut self,
        pats: impl IntoIterator<Item = &'p Pat>,
        keep: Option<&str>,
        hoisted: bool,
    ) {
        let mut names = Vec::new();
        for pat in pats {
            binding_names(pat, &mut names);
        }
        for name in names {
            if Some(name.as_str()) != keep {
                self.shadow(&name, hoisted);
            }
        }
    }

    /// Declare `name` as a plain local if it hides a visible translation binding.
    fn shadow(&mut self, name: &str, hoisted: bool) {
        if !self.scopes.has_binding(name) {
            return;
        }
        log::debug!("`{}` shadowed in {}", name, self.file_path);
        if hoisted {
            self.scopes.declare_in_function_scope(name, ScopeEntry::Shadowed);
        } else {
            self.scopes.declare(name, ScopeEntry::Shadowed);
        }
    }

    /// Scope setup shared by every function form: parameters shadow outer
    /// bindings, then any render-prop binding aimed at this function is declared.
    fn enter_function<'p>(&mut self, span: Span, params: impl IntoIterator<Item = &'p Pat>) {
        self.scopes.enter_function_scope();
        self.shadow_names(params, None, false);
        self.resolver.declare_param_bindings(span, &mut self.scopes);
    }

    fn with_scope(&mut self, f: impl FnOnce(&mut Self)) {
        self.scopes.enter_scope();
        f(self);
        self.scopes.exit_scope();
    }
}

impl<'a> Visit for FileAnalyzer<'a> {
    // ============================================================
    // Scope-introducing nodes
    // ============================================================

    fn visit_function(&mut self, node: &Function) {
        self.enter_function(node.span, node.params.iter().map(|p| &p.pat));
        node.decorators.visit_with(self);
        node.params.visit_with(self);
        // The body shares the function scope.
        if let Some(body) = &node.body {
            body.visit_children_with(self);
        }
        self.scopes.exit_scope();
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.enter_function(node.span, node.params.iter());
        node.params.visit_with(self);
        match &*node.body {
            BlockStmtOrExpr::BlockStmt(block) => block.visit_children_with(self),
            BlockStmtOrExpr::Expr(expr) => expr.visit_with(self),
        }
        self.scopes.exit_scope();
    }

    fn visit_constructor(&mut self, node: &Constructor) {
        let params = node.params.iter().filter_map(|param| match param {
            ParamOrTsParamProp::Param(param) => Some(&param.pat),
            ParamOrTsParamProp::TsParamProp(_) => None,
        });
        self.enter_function(node.span, params);
        node.params.visit_with(self);
        if let Some(body) = &node.body {
            body.visit_children_with(self);
        }
        self.scopes.exit_scope();
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_in_stmt(&mut self, node: &ForInStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_of_stmt(&mut self, node: &ForOfStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_switch_stmt(&mut self, node: &SwitchStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        self.with_scope(|this| {
            this.shadow_names(node.param.iter(), None, false);
            node.param.visit_with(this);
            node.body.visit_children_with(this);
        });
    }

    // ============================================================
    // Declaration sites
    // ============================================================

    fn visit_var_decl(&mut self, node: &VarDecl) {
        let hoisted = node.kind == VarDeclKind::Var;
        for decl in &node.decls {
            let declared = self.register(DeclarationSite::VarDeclarator(decl), hoisted);
            decl.init.visit_with(self);
            self.shadow_names([&decl.name], declared.as_deref(), hoisted);
        }
    }

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.shadow(node.ident.sym.as_str(), false);
        node.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        self.shadow(node.ident.sym.as_str(), false);
        node.visit_children_with(self);
    }

    fn visit_assign_expr(&mut self, node: &AssignExpr) {
        let declared = self.register_declaration(DeclarationSite::Assign(node));
        node.left.visit_with(self);
        node.right.visit_with(self);
        if declared.is_none()
            && let AssignTarget::Simple(SimpleAssignTarget::Ident(binding)) = &node.left
        {
            self.shadow(binding.id.sym.as_str(), false);
        }
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        for specifier in &node.specifiers {
            if let ImportSpecifier::Named(named) = specifier {
                self.register_declaration(DeclarationSite::Import {
                    decl: node,
                    specifier: named,
                });
            }
        }
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if self
            .register_declaration(DeclarationSite::JsxElement(node))
            .is_none()
        {
            self.record_call(CallSite::JsxElement(&node.opening));
        }
        node.visit_children_with(self);
    }

    // ============================================================
    // Call sites
    // ============================================================

    fn visit_call_expr(&mut self, node: &CallExpr) {
        self.record_call(CallSite::Call(node));
        node.visit_children_with(self);
    }
}
