//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use std::{
    fmt::Write as FmtWrite,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// The largest type list that gets a storage, projections and dispatch.
const MAX_ARITY: usize = 12;

/// `f(0), f(1), ..., f(n-1), ` with a trailing separator.
fn list(n: usize, f: impl Fn(usize) -> String) -> String {
    (0..n).fold(String::new(), |mut acc, i| {
        write!(acc, "{}, ", f(i)).unwrap();
        acc
    })
}
/// `f(0) f(1) ... f(n-1)` with no separator.
fn concat(n: usize, f: impl Fn(usize) -> String) -> String {
    (0..n).fold(String::new(), |mut acc, i| {
        acc.push_str(&f(i));
        acc
    })
}
/// A `match` over `scrutinee`, or the empty match that proves `Slots0` uninhabited.
fn matching(n: usize, scrutinee: &str, arms: String) -> String {
    if n == 0 {
        format!("match *{scrutinee} {{}}")
    } else {
        format!("match {scrutinee} {{ {arms} }}")
    }
}
fn matching_owned(n: usize, scrutinee: &str, arms: String) -> String {
    if n == 0 {
        format!("match {scrutinee} {{}}")
    } else {
        format!("match {scrutinee} {{ {arms} }}")
    }
}

fn storage(file: &mut impl Write, n: usize) -> std::io::Result<()> {
    let generics = list(n, |i| format!("T{i}"));
    let bounded = |bound: &str| list(n, |i| format!("T{i}: {bound}"));
    let slots = format!("Slots{n}<{generics}>");
    let tuple = format!("({generics})");
    writeln!(
        file,
        r##"
/// Discriminated storage for {n} alternatives.
///
/// Each variant holds a single [`Cell`], so dropping the enum drops the active alternative
/// only, and rustc is free to pick the smallest tag (or a niche) for it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum {slots} {{ {variants} }}

impl<{display}> core::fmt::Display for {slots} {{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {{
        {display_body}
    }}
}}

impl<{alternatives}> IAlternatives for {tuple} {{
    type Storage = {slots};
    const COUNT: usize = {n};
    const KINDS: &'static [Kind] = &[{kinds}];
    const CAPABILITIES: Capabilities = {capabilities};
    fn type_name_at(index: usize) -> Option<&'static str> {{
        match index {{ {names} _ => None }}
    }}
    fn type_id_at(index: usize) -> Option<core::any::TypeId>
    where
        Self: 'static,
    {{
        match index {{ {ids} _ => None }}
    }}
}}

impl<{generics}> IStorage for {slots} {{
    const COUNT: usize = {n};
    fn index(&self) -> usize {{
        {index_body}
    }}
    #[allow(unreachable_patterns)]
    fn move_assign_same(&mut self, other: Self) -> Result<(), Self> {{
        {move_assign_body}
    }}
    #[allow(unreachable_patterns)]
    fn swap_same(&mut self, other: &mut Self) -> bool {{
        {swap_body}
    }}
    fn type_name(&self) -> &'static str {{
        {type_name_body}
    }}
}}

impl<{clone}> ICloneAssign for {slots} {{
    #[allow(unreachable_patterns)]
    fn clone_assign_same(&mut self, other: &Self) -> bool {{
        {clone_assign_body}
    }}
}}
"##,
        variants = list(n, |i| format!("V{i}(Cell<T{i}>)")),
        display = bounded("core::fmt::Display"),
        display_body = if n == 0 {
            "let _ = f; match *self {}".to_string()
        } else {
            matching(
                n,
                "self",
                concat(n, |i| format!(
                    "Self::V{i}(cell) => core::fmt::Display::fmt(cell.read(), f),"
                )),
            )
        },
        alternatives = bounded("IAlternative"),
        kinds = list(n, |i| format!("T{i}::KIND")),
        capabilities = if n == 0 {
            "Capabilities::ALL.without(Capabilities::DEFAULT.union(Capabilities::NOTHROW_DEFAULT))"
                .to_string()
        } else {
            format!(
                "T0::CAPABILITIES{}",
                concat(n - 1, |i| format!(".and_then(T{}::CAPABILITIES)", i + 1))
            )
        },
        names = concat(n, |i| format!(
            "{i} => Some(core::any::type_name::<T{i}>()),"
        )),
        ids = concat(n, |i| format!(
            "{i} => Some(core::any::TypeId::of::<T{i}>()),"
        )),
        index_body = matching(n, "self", concat(n, |i| format!("Self::V{i}(_) => {i},"))),
        move_assign_body = if n == 0 {
            "let _ = other; match *self {}".to_string()
        } else {
            format!(
                "match (self, other) {{ {} (_, other) => Err(other) }}",
                concat(n, |i| format!(
                    "(Self::V{i}(cell), Self::V{i}(value)) => {{ cell.assign(value.into_inner()); Ok(()) }}"
                ))
            )
        },
        swap_body = if n == 0 {
            "let _ = other; match *self {}".to_string()
        } else {
            format!(
                "match (self, other) {{ {} _ => false }}",
                concat(n, |i| format!(
                    "(Self::V{i}(a), Self::V{i}(b)) => {{ core::mem::swap(a.read_mut(), b.read_mut()); true }}"
                ))
            )
        },
        type_name_body = matching(
            n,
            "self",
            concat(n, |i| format!(
                "Self::V{i}(_) => core::any::type_name::<T{i}>(),"
            ))
        ),
        clone = bounded("Clone"),
        clone_assign_body = if n == 0 {
            "let _ = other; match *self {}".to_string()
        } else {
            format!(
                "match (self, other) {{ {} _ => false }}",
                concat(n, |i| format!(
                    "(Self::V{i}(a), Self::V{i}(b)) => {{ a.read_mut().clone_from(b.read()); true }}"
                ))
            )
        },
    )?;
    Ok(())
}

fn projections(file: &mut impl Write, n: usize) -> std::io::Result<()> {
    let generics = list(n, |i| format!("T{i}"));
    let alternatives = list(n, |i| format!("T{i}: IAlternative"));
    let tuple = format!("({generics})");
    for k in 0..n {
        let rest_generics = (0..n)
            .filter(|i| *i != k)
            .fold(String::new(), |mut acc, i| {
                write!(acc, "T{i}, ").unwrap();
                acc
            });
        let split_arms = concat(n, |i| match i.cmp(&k) {
            core::cmp::Ordering::Less => {
                format!("Slots{n}::V{i}(cell) => Err(Slots{m}::V{i}(cell)),", m = n - 1)
            }
            core::cmp::Ordering::Equal => format!("Slots{n}::V{i}(cell) => Ok(cell.into_inner()),"),
            core::cmp::Ordering::Greater => format!(
                "Slots{n}::V{i}(cell) => Err(Slots{m}::V{j}(cell)),",
                m = n - 1,
                j = i - 1
            ),
        });
        writeln!(
            file,
            r##"
impl<{alternatives}> IAt<{k}> for {tuple} {{
    type Item = T{k};
    fn construct(value: T{k}) -> Slots{n}<{generics}> {{
        Slots{n}::V{k}(Cell::new(value))
    }}
    #[allow(unreachable_patterns)]
    fn read(storage: &Slots{n}<{generics}>) -> Option<&T{k}> {{
        match storage {{ Slots{n}::V{k}(cell) => Some(cell.read()), _ => None }}
    }}
    #[allow(unreachable_patterns)]
    fn read_mut(storage: &mut Slots{n}<{generics}>) -> Option<&mut T{k}> {{
        match storage {{ Slots{n}::V{k}(cell) => Some(cell.read_mut()), _ => None }}
    }}
    #[allow(unreachable_patterns)]
    fn take(storage: Slots{n}<{generics}>) -> Result<T{k}, Slots{n}<{generics}>> {{
        match storage {{ Slots{n}::V{k}(cell) => Ok(cell.into_inner()), storage => Err(storage) }}
    }}
}}

impl<{alternatives}> IContains<T{k}, Idx<{k}>> for {tuple} {{
    const INDEX: usize = {k};
    fn construct(value: T{k}) -> Slots{n}<{generics}> {{
        <Self as IAt<{k}>>::construct(value)
    }}
    fn read(storage: &Slots{n}<{generics}>) -> Option<&T{k}> {{
        <Self as IAt<{k}>>::read(storage)
    }}
    fn read_mut(storage: &mut Slots{n}<{generics}>) -> Option<&mut T{k}> {{
        <Self as IAt<{k}>>::read_mut(storage)
    }}
    fn take(storage: Slots{n}<{generics}>) -> Result<T{k}, Slots{n}<{generics}>> {{
        <Self as IAt<{k}>>::take(storage)
    }}
}}

impl<{alternatives}> IRemove<Idx<{k}>> for {tuple} {{
    type Removed = T{k};
    type Rest = ({rest_generics});
    fn split(storage: Slots{n}<{generics}>) -> Result<T{k}, Slots{m}<{rest_generics}>> {{
        match storage {{ {split_arms} }}
    }}
}}
"##,
            m = n - 1,
        )?;
    }
    let indices = list(n, |i| format!("I{i}"));
    let contains = concat(n, |i| format!(" + IContains<T{i}, I{i}>"));
    writeln!(
        file,
        r##"
impl<Sup: IAlternatives{contains}, {alternatives}{indices}> ISubsetOf<Sup, ({indices})> for {tuple} {{
    fn inject(storage: Slots{n}<{generics}>) -> <Sup as IAlternatives>::Storage {{
        {inject_body}
    }}
    fn inject_index(index: usize) -> usize {{
        match index {{ {index_arms} _ => <Sup as IAlternatives>::COUNT }}
    }}
}}
"##,
        inject_body = matching_owned(
            n,
            "storage",
            concat(n, |i| format!(
                "Slots{n}::V{i}(cell) => <Sup as IContains<T{i}, I{i}>>::construct(cell.into_inner()),"
            ))
        ),
        index_arms = concat(n, |i| format!("{i} => <Sup as IContains<T{i}, I{i}>>::INDEX,")),
    )?;
    Ok(())
}

fn dispatch(file: &mut impl Write, n: usize) -> std::io::Result<()> {
    let generics = list(n, |i| format!("T{i}"));
    let tuple = format!("({generics})");
    let slots = format!("Slots{n}<{generics}>");
    let alternatives = list(n, |i| format!("T{i}: IAlternative"));
    let outlived = list(n, |i| format!("T{i}: IAlternative + 'a"));
    let visitor_bounds =
        |reference: &str| concat(n, |i| format!(" + IVisitor<{reference}T{i}, Output = R>"));
    let ref_bounds = visitor_bounds("&'a ");
    let mut_bounds = visitor_bounds("&'a mut ");
    let owned_bounds = visitor_bounds("");
    let closures = |param: &str| list(n, |i| format!("F{i}: FnOnce({param}T{i}) -> U"));
    let arguments = list(n, |i| format!("f{i}: F{i}"));
    writeln!(
        file,
        r##"
impl<'a, {outlived}F, R> IVisitRef<'a, F> for {tuple}
where
    F: Sized{ref_bounds},
{{
    type Output = R;
    fn visit_ref(storage: &'a {slots}, f: F) -> Self::Output {{
        match storage {{ {ref_arms} }}
    }}
}}

impl<'a, {outlived}F, R> IVisitMut<'a, F> for {tuple}
where
    F: Sized{mut_bounds},
{{
    type Output = R;
    fn visit_mut(storage: &'a mut {slots}, f: F) -> Self::Output {{
        match storage {{ {mut_arms} }}
    }}
}}

impl<{alternatives}F, R> IVisitOwned<F> for {tuple}
where
    F: Sized{owned_bounds},
{{
    type Output = R;
    fn visit_owned(storage: {slots}, f: F) -> Self::Output {{
        match storage {{ {owned_arms} }}
    }}
}}

impl<{alternatives}> Variant<{tuple}> {{
    /// Equivalent to `match &self`, with one closure per alternative.
    pub fn match_ref<'a, U, {ref_closures}>(&'a self, {arguments}) -> U {{
        match self.storage() {{ {match_ref_arms} }}
    }}
    /// Equivalent to `match &mut self`, with one closure per alternative.
    pub fn match_mut<'a, U, {mut_closures}>(&'a mut self, {arguments}) -> U {{
        match self.storage_mut() {{ {match_mut_arms} }}
    }}
    /// Equivalent to `match self`, with one closure per alternative.
    pub fn match_owned<U, {owned_closures}>(self, {arguments}) -> U {{
        match self.into_storage() {{ {match_owned_arms} }}
    }}
}}
"##,
        ref_arms = concat(n, |i| format!(
            "Slots{n}::V{i}(cell) => <F as IVisitor<&'a T{i}>>::visit(f, cell.read()),"
        )),
        mut_arms = concat(n, |i| format!(
            "Slots{n}::V{i}(cell) => <F as IVisitor<&'a mut T{i}>>::visit(f, cell.read_mut()),"
        )),
        owned_arms = concat(n, |i| format!(
            "Slots{n}::V{i}(cell) => <F as IVisitor<T{i}>>::visit(f, cell.into_inner()),"
        )),
        ref_closures = closures("&'a "),
        mut_closures = closures("&'a mut "),
        owned_closures = closures(""),
        match_ref_arms = concat(n, |i| format!("Slots{n}::V{i}(cell) => f{i}(cell.read()),")),
        match_mut_arms = concat(n, |i| format!(
            "Slots{n}::V{i}(cell) => f{i}(cell.read_mut()),"
        )),
        match_owned_arms = concat(n, |i| format!(
            "Slots{n}::V{i}(cell) => f{i}(cell.into_inner()),"
        )),
    )?;
    Ok(())
}

fn slots() -> std::io::Result<()> {
    let filename = PathBuf::from(std::env::var_os("OUT_DIR").unwrap()).join("slots.rs");
    let mut file = BufWriter::new(File::create(filename)?);
    for n in 0..=MAX_ARITY {
        storage(&mut file, n)?;
        projections(&mut file, n)?;
        if n > 0 {
            dispatch(&mut file, n)?;
        }
    }
    Ok(())
}

fn main() {
    slots().unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}
